//! Validated launch configurations
//!
//! Each record checks the files it references when it is constructed, so a
//! record that exists is always safe to turn into a command.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{LaunchError, Result};

/// GDB command script looked up in the configuration root
pub const GDB_CONFIG_FILENAME: &str = "config.gdb";

/// openocd board configuration looked up in the configuration root
pub const OPENOCD_CONFIG_FILENAME: &str = "openocd.cfg";

/// Attach `arm-none-eabi-gdb` to a GDB server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachConfig {
    port: u16,
    target_file: PathBuf,
    script_file: PathBuf,
    tool_path: Option<PathBuf>,
}

impl AttachConfig {
    /// The GDB script is checked before the target file.
    pub fn new(
        port: u16,
        target_file: &Path,
        config_root: &Path,
        tool_path: Option<PathBuf>,
    ) -> Result<Self> {
        let script_file = config_root.join(GDB_CONFIG_FILENAME);
        debug!("Looking for GDB configuration at {}", script_file.display());

        if !script_file.exists() {
            return Err(LaunchError::ConfigurationNotFound {
                tool: "GDB",
                path: script_file,
            });
        }
        if !target_file.exists() {
            return Err(LaunchError::TargetNotFound(target_file.to_path_buf()));
        }

        Ok(Self {
            port,
            target_file: target_file.to_path_buf(),
            script_file,
            tool_path,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target_file(&self) -> &Path {
        &self.target_file
    }

    pub fn script_file(&self) -> &Path {
        &self.script_file
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.tool_path.as_deref()
    }
}

/// Start `openocd` as a GDB server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    script_file: PathBuf,
    tool_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn new(config_root: &Path, tool_path: Option<PathBuf>) -> Result<Self> {
        let script_file = config_root.join(OPENOCD_CONFIG_FILENAME);
        debug!("Looking for openocd configuration at {}", script_file.display());

        if !script_file.exists() {
            return Err(LaunchError::ConfigurationNotFound {
                tool: "openocd",
                path: script_file,
            });
        }

        Ok(Self { script_file, tool_path })
    }

    pub fn script_file(&self) -> &Path {
        &self.script_file
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.tool_path.as_deref()
    }
}

/// What the loader does to the target's flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashMode {
    /// Full chip erase
    Erase,
    /// Write the image, verify it, then reset the processor
    Write { image_file: PathBuf },
}

/// Drive `STM32_Programmer_CLI` over SWD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashConfig {
    mode: FlashMode,
    tool_path: Option<PathBuf>,
}

impl FlashConfig {
    /// Exactly one of `erase` or `image_file` must be given.
    pub fn new(
        erase: bool,
        image_file: Option<PathBuf>,
        tool_path: Option<PathBuf>,
    ) -> Result<Self> {
        let mode = match (erase, image_file) {
            (true, None) => FlashMode::Erase,
            (true, Some(image_file)) => return Err(LaunchError::ConflictingModes(image_file)),
            (false, None) => return Err(LaunchError::ImageRequired),
            (false, Some(image_file)) => {
                if !image_file.exists() {
                    return Err(LaunchError::InputNotFound(image_file));
                }
                FlashMode::Write { image_file }
            }
        };

        Ok(Self { mode, tool_path })
    }

    pub fn mode(&self) -> &FlashMode {
        &self.mode
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.tool_path.as_deref()
    }
}
