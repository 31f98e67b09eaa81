pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{format_currency, format_dimensions, format_power, short_id};
