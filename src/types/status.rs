//! Result codes reported across the C surface.

use super::GraphResult;

/// The closed set of result codes an operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// The operation completed.
    Success = 0,
    /// Unset sentinel. Never returned by any operation.
    Undefined = 1,
    /// A required handle or out-pointer was null or malformed.
    InvalidParameters = 2,
    /// An allocation failed.
    OutOfMemory = 3,
    /// Duplicate vertex ID or duplicate edge.
    AlreadyExists = 4,
    /// Missing vertex or edge.
    NotFound = 5,
}

impl Status {
    /// Convert an i32 code to a Status, returning None for unknown codes.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::Undefined),
            2 => Some(Self::InvalidParameters),
            3 => Some(Self::OutOfMemory),
            4 => Some(Self::AlreadyExists),
            5 => Some(Self::NotFound),
            _ => None,
        }
    }

    /// Return a human-readable name for this code.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Undefined => "undefined",
            Self::InvalidParameters => "invalid_parameters",
            Self::OutOfMemory => "out_of_memory",
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
        }
    }

    /// The code describing how `result` completed.
    pub fn of<T>(result: &GraphResult<T>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(err) => err.status(),
        }
    }

    /// The numeric code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
