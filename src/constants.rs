/// Status of a commission record that is still being worked
pub const RECORD_STATUS_OPEN: &str = "open";

/// Status of a commission record whose claim has settled
pub const RECORD_STATUS_CLOSED: &str = "closed";

/// Display precision for currency amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of quarters in a plan year
pub const QUARTERS_PER_YEAR: usize = 4;

/// Number of months in a plan year
pub const MONTHS_PER_YEAR: usize = 12;
