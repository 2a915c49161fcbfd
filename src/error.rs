//! Error types for the launchers

use std::path::PathBuf;
use thiserror::Error;

/// Main error type shared by all three launchers
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Cannot find {tool} configuration: {}", .path.display())]
    ConfigurationNotFound { tool: &'static str, path: PathBuf },

    #[error("Cannot find ELF file: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("Cannot find image file: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No image file given (pass an image file or --erase)")]
    ImageRequired,

    #[error("Cannot erase and write in one run (got --erase and {})", .0.display())]
    ConflictingModes(PathBuf),

    #[error("Failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_missing_path() {
        let err = LaunchError::TargetNotFound(PathBuf::from("nofile.elf"));
        assert_eq!(err.to_string(), "Cannot find ELF file: nofile.elf");

        let err = LaunchError::ConfigurationNotFound {
            tool: "openocd",
            path: PathBuf::from("scripts/openocd.cfg"),
        };
        assert_eq!(err.to_string(), "Cannot find openocd configuration: scripts/openocd.cfg");
    }
}
