pub mod email;
pub mod name;

pub use email::validate_email;
pub use name::validate_display_name;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    EmailEmpty,
    EmailTooLong,
    EmailInvalidFormat,
    DisplayNameEmpty,
    DisplayNameTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailEmpty => write!(f, "Email cannot be empty"),
            Self::EmailTooLong => write!(f, "Email is too long (max 254 characters)"),
            Self::EmailInvalidFormat => write!(f, "Invalid email format"),
            Self::DisplayNameEmpty => write!(f, "Name cannot be empty"),
            Self::DisplayNameTooLong => write!(f, "Name is too long (max 100 characters)"),
        }
    }
}

impl std::error::Error for ValidationError {}
