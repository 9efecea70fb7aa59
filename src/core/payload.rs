//! Render-agnostic result payloads.
//!
//! Renderers describe output as an ordered list of [`Fragment`]s; hosts decide how
//! to style them. [`Payload::to_plain_lines`] is the reference text layout.

use crate::core::text::width::{pad_to_width, visible_width};

const METER_CELLS: usize = 20;
const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Heading(String),
    Text(String),
    Muted(String),
    Field { label: String, value: String },
    /// One row of a table; columns align across every row in the payload.
    Columns(Vec<String>),
    Tags { label: String, items: Vec<String> },
    Meter { label: String, percent: u8 },
    Spacer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fragments: Vec<Fragment>,
}

impl Payload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Text(text.into())],
        }
    }

    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn to_plain_lines(&self) -> Vec<String> {
        let column_widths = self.column_widths();
        let meter_label_width = self
            .fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Meter { label, .. } => Some(visible_width(label)),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        self.fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Heading(text) | Fragment::Text(text) | Fragment::Muted(text) => {
                    text.clone()
                }
                Fragment::Field { label, value } => format!("{label} {value}"),
                Fragment::Columns(cells) => layout_columns(cells, &column_widths),
                Fragment::Tags { label, items } => format!("{label} {}", items.join(", ")),
                Fragment::Meter { label, percent } => format!(
                    "{}{COLUMN_GAP}{} {percent}%",
                    pad_to_width(label, meter_label_width),
                    meter_bar(*percent)
                ),
                Fragment::Spacer => String::new(),
            })
            .collect()
    }

    /// Joined plain text, one line per fragment.
    pub fn plain_text(&self) -> String {
        self.to_plain_lines().join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for fragment in &self.fragments {
            let Fragment::Columns(cells) = fragment else {
                continue;
            };
            for (index, cell) in cells.iter().enumerate() {
                let width = visible_width(cell);
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::text(value)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::text(value)
    }
}

fn layout_columns(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        if index == last {
            line.push_str(cell);
        } else {
            line.push_str(&pad_to_width(cell, widths.get(index).copied().unwrap_or(0)));
        }
    }
    line.trim_end().to_string()
}

fn meter_bar(percent: u8) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * METER_CELLS + 50) / 100;
    let mut bar = String::with_capacity(METER_CELLS * 3);
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(METER_CELLS - filled));
    bar
}
