pub mod width;
