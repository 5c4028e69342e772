//! The engine's closed error taxonomy.

use thiserror::Error;

/// Closed set of compiler failure reasons, plus `Success`.
///
/// Discriminants are a stable public contract — their relative order must
/// not change, since [`status_message_from_code`] and any external caller
/// that persists raw codes depend on it.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Status {
    #[error("Success")]
    Success = 0,
    #[error("Expected a regular character")]
    ExpectedChar = 1,
    #[error("Expected a character in a set")]
    ExpectedElement = 2,
    #[error("Expected ']'")]
    ExpectedRBracket = 3,
    #[error("Expected ')'")]
    ExpectedRParen = 4,
    #[error("Expected a special character (one of \"()*+-?[]^|\")")]
    ExpectedSpecial = 5,
    #[error("Unexpected special character")]
    UnexpectedSpecial = 6,
    #[error("Unexpected end of input")]
    UnexpectedEnd = 7,
    #[error("Range is out of order")]
    UnorderedRange = 8,
    #[error("Failed to allocate memory")]
    NoMemory = 9,
}

impl Status {
    /// A short, human-readable message for this status. Pure, fixed
    /// strings — equivalent to [`status_message`] as an inherent method.
    pub const fn message(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::ExpectedChar => "Expected a regular character",
            Status::ExpectedElement => "Expected a character in a set",
            Status::ExpectedRBracket => "Expected ']'",
            Status::ExpectedRParen => "Expected ')'",
            Status::ExpectedSpecial => {
                "Expected a special character (one of \"()*+-?[]^|\")"
            }
            Status::UnexpectedSpecial => "Unexpected special character",
            Status::UnexpectedEnd => "Unexpected end of input",
            Status::UnorderedRange => "Range is out of order",
            Status::NoMemory => "Failed to allocate memory",
        }
    }
}

/// Same lookup as [`Status::message`], as a free function.
pub fn status_message(status: Status) -> &'static str {
    status.message()
}

/// Looks up a message by raw `u32` discriminant, for callers that only
/// have the numeric code rather than a [`Status`] value. Unlike
/// [`Status::message`], this is total: out-of-range codes yield
/// `"Unknown error"` instead of being unrepresentable.
pub fn status_message_from_code(code: u32) -> &'static str {
    match code {
        0 => Status::Success.message(),
        1 => Status::ExpectedChar.message(),
        2 => Status::ExpectedElement.message(),
        3 => Status::ExpectedRBracket.message(),
        4 => Status::ExpectedRParen.message(),
        5 => Status::ExpectedSpecial.message(),
        6 => Status::UnexpectedSpecial.message(),
        7 => Status::UnexpectedEnd.message(),
        8 => Status::UnorderedRange.message(),
        9 => Status::NoMemory.message(),
        _ => "Unknown error",
    }
}

/// A compile failure: the [`Status`] kind plus the byte offset of the
/// offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{status} at offset {offset}")]
pub struct CompileError {
    pub status: Status,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_is_unique() {
        assert_eq!(Status::Success.message(), "Success");
        for &s in ALL {
            if s != Status::Success {
                assert_ne!(s.message(), "Success");
            }
        }
    }

    #[test]
    fn every_message_is_non_empty() {
        for &s in ALL {
            assert!(!s.message().is_empty());
        }
    }

    #[test]
    fn from_code_round_trips_known_codes() {
        for &s in ALL {
            assert_eq!(status_message_from_code(s as u32), s.message());
        }
    }

    #[test]
    fn from_code_reports_unknown_for_out_of_range() {
        assert_eq!(status_message_from_code(10), "Unknown error");
        assert_eq!(status_message_from_code(u32::MAX), "Unknown error");
    }

    const ALL: &[Status] = &[
        Status::Success,
        Status::ExpectedChar,
        Status::ExpectedElement,
        Status::ExpectedRBracket,
        Status::ExpectedRParen,
        Status::ExpectedSpecial,
        Status::UnexpectedSpecial,
        Status::UnexpectedEnd,
        Status::UnorderedRange,
        Status::NoMemory,
    ];
}
