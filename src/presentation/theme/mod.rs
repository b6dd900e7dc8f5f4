pub mod adapter;
pub mod service;

pub use service::{Theme, parse_color, to_color};
