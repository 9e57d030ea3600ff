use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong before the first frame is drawn.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    NonPositive { field: &'static str, value: f32 },
    ZeroLimit { field: &'static str },
    ScaleBelowOne { field: &'static str, value: f32 },
    FleetDoesNotFit { columns: usize, rows: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read settings file {}: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "cannot parse settings file {}: {message}", path.display())
            }
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            Self::ZeroLimit { field } => write!(f, "{field} must be at least 1"),
            Self::ScaleBelowOne { field, value } => {
                write!(f, "{field} must be at least 1.0, got {value}")
            }
            Self::FleetDoesNotFit { columns, rows } => write!(
                f,
                "screen too small for the alien fleet: {columns} column(s) x {rows} row(s)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
