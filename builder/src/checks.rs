use crate::error::{ArgumentError, Result};

pub fn not_empty(value: &str, what: &'static str) -> Result<()> {
    if value.is_empty() {
        Err(ArgumentError::Empty(what))
    } else {
        Ok(())
    }
}

/// Bounds the number of characters, not bytes.
pub fn not_longer(value: &str, max: usize, what: &'static str) -> Result<()> {
    if value.chars().count() > max {
        Err(ArgumentError::TooLong(what, max))
    } else {
        Ok(())
    }
}

pub fn alphanumeric_with_dash(value: &str, what: &'static str) -> Result<()> {
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(ArgumentError::InvalidFormat(what))
    }
}

pub fn is_lowercase(value: &str, what: &'static str) -> Result<()> {
    if value.chars().any(|c| c.is_uppercase()) {
        Err(ArgumentError::NotLowercase(what))
    } else {
        Ok(())
    }
}

pub fn check(condition: bool, error: ArgumentError) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(error)
    }
}
