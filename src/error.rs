use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid transaction amount \"{value}\" on line {line}")]
    InvalidAmount { line: u64, value: String },

    #[error("Line {line} has no field at position {index}")]
    MissingField { line: u64, index: usize },

    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_amount() {
        let e = AppError::InvalidAmount {
            line: 7,
            value: "12.5".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid transaction amount "12.5" on line 7"#
        );
    }

    #[test]
    fn app_error_display_missing_field() {
        let e = AppError::MissingField { line: 3, index: 15 };
        assert_eq!(e.to_string(), "Line 3 has no field at position 15");
    }

    #[test]
    fn app_error_display_io_includes_path() {
        let e = AppError::io(
            "/no/such/itcont.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = e.to_string();
        assert!(msg.contains("/no/such/itcont.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn app_error_from_io_write() {
        let e = AppError::Write(std::io::Error::other("disk full"));
        assert_eq!(e.to_string(), "Failed to write report: disk full");
    }
}
