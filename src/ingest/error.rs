use std::{fmt, io, path::PathBuf};

use super::row::MAX_LINE_LEN;

/// Every way a load can fail. All of them abort the whole load.
#[derive(Debug)]
pub enum IngestError {
    FileOpen { path: PathBuf, source: io::Error },
    Io(io::Error),
    EmptyData,
    LineTooLong { line: usize },
    MalformedRow { line: usize, raw: String },
    RowLimitExceeded { limit: usize },
    RoomLimitExceeded { limit: usize },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen { path, source } => {
                write!(f, "File not found: {} ({source})", path.display())
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::EmptyData => write!(
                f,
                "CSV file is empty or contains only the header with no data rows."
            ),
            Self::LineTooLong { line } => write!(
                f,
                "line {line} in file exceeds maximum allowed length of {MAX_LINE_LEN} characters."
            ),
            Self::MalformedRow { line, raw } => write!(
                f,
                "Incomplete data in CSV file at line {line}. Expected 'temperature,room_name'.\n       {:<25} : {raw}",
                "Data in question"
            ),
            Self::RowLimitExceeded { limit } => {
                write!(f, "Max number of temp rows exceeded {limit} limit.")
            }
            Self::RoomLimitExceeded { limit } => {
                write!(f, "Maximum number of rooms exceeded {limit} limit.")
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IngestError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
