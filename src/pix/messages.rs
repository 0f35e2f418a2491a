//! The closed set of messages shown to whoever confirms a Pix.

pub const SUCCESS: &str = "Pix created successfully.";

pub const NO_POSITIVE_VALUE: &str = "Pix value cannot be less than or equal to zero.";

pub const BLANK_KEY: &str = "Pix key cannot be blank.";

pub const INSUFFICIENT_BALANCE: &str = "Your balance is insufficient.";

pub const KEY_NOT_FOUND: &str = "Pix key not found.";

pub const INTERNAL_ERROR: &str = "Internal error.";

pub const CONNECTION_ERROR: &str = "Connection error.";
