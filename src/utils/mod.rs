pub mod format_utils;

pub use format_utils::{format_currency, format_percent};
