use serde::{Deserialize, Serialize};

// The looked-up symbolic name is not a member of the message catalog.
pub const CD_UNKNOWN_MESSAGE: &str = "UnknownMessage";
pub const MSG_UNKNOWN_MESSAGE: &str = "unknown_message";

/// Lookup of a symbolic name outside the defined set.
///
/// This signals a defect in the calling code (a typo, or a version mismatch
/// between the caller and the catalog), not a transient condition. Do not retry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UnknownMessageError {
    pub code: String,
    pub name: String,
}

impl UnknownMessageError {
    pub fn new(name: &str) -> Self {
        UnknownMessageError {
            code: CD_UNKNOWN_MESSAGE.to_string(),
            name: name.to_string(),
        }
    }
}

impl std::error::Error for UnknownMessageError {}

impl std::fmt::Display for UnknownMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: \"{}\" - {}", self.code, self.name, MSG_UNKNOWN_MESSAGE)
    }
}
