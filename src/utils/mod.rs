pub mod date;
pub mod formatting;

pub use formatting::{format_money, parse_amount};
