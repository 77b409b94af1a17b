use std::fmt;

use super::{normalize, Room, RoomTable};

/// Why a query did not resolve to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// Nothing was typed. Caught by the numeric guard, since an empty string
    /// has no non-digit character.
    Empty,
    /// The query is made only of digits and is never looked up.
    Numeric,
    /// No room shares the query's normalized key.
    Unknown,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty query"),
            Self::Numeric => write!(f, "numeric-only query"),
            Self::Unknown => write!(f, "no matching room"),
        }
    }
}

/// True when every character is an ASCII digit. Vacuously true for `""`.
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Resolve a typed room name against the table.
pub fn resolve<'a>(table: &'a RoomTable, query: &str) -> Result<&'a Room, Miss> {
    if is_numeric(query) {
        return Err(if query.is_empty() {
            Miss::Empty
        } else {
            Miss::Numeric
        });
    }
    table.find(&normalize(query)).ok_or(Miss::Unknown)
}
