//! Command line arguments for the launchers and their conversion into
//! validated launch configurations

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use crate::tools::{AttachConfig, FlashConfig, ServerConfig};

/// Default GDB server port (openocd's default `gdb_port`)
pub const DEFAULT_GDB_PORT: u16 = 3333;

/// Logging options shared by every launcher
#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file path (defaults to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Command line arguments for `mcu-gdb`
#[derive(Parser, Debug)]
#[command(name = "mcu-gdb")]
#[command(about = "Attach arm-none-eabi-gdb to a running GDB server for step debugging")]
#[command(version)]
pub struct GdbArgs {
    /// GDB server port to attach to
    #[arg(short, long, default_value_t = DEFAULT_GDB_PORT)]
    pub port: u16,

    /// ELF file to debug
    pub elf: PathBuf,

    /// Directory holding config.gdb (defaults to this executable's directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Path to the gdb binary (defaults to arm-none-eabi-gdb on PATH)
    #[arg(long)]
    pub gdb_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Command line arguments for `mcu-gdb-server`
#[derive(Parser, Debug)]
#[command(name = "mcu-gdb-server")]
#[command(about = "Start an openocd GDB server that arm-none-eabi-gdb can attach to")]
#[command(version)]
pub struct GdbServerArgs {
    /// Directory holding openocd.cfg (defaults to this executable's directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Path to openocd binary (defaults to searching PATH)
    #[arg(long)]
    pub openocd_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Command line arguments for `mcu-loader`
#[derive(Parser, Debug)]
#[command(name = "mcu-loader")]
#[command(about = "Flash an image to the microcontroller, or erase its entire flash")]
#[command(version)]
pub struct LoaderArgs {
    /// Erase the controller
    #[arg(short, long)]
    pub erase: bool,

    /// Image (hex) file to write, verify and reset into
    pub image: Option<PathBuf>,

    /// Path to STM32_Programmer_CLI (defaults to searching PATH)
    #[arg(long)]
    pub programmer_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Directory the fixed-name configuration files are looked up in.
///
/// An explicit `--config-dir` wins; otherwise the directory containing the
/// running executable is used.
pub fn resolve_config_root(config_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = config_dir {
        return Ok(dir.to_path_buf());
    }
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

impl AttachConfig {
    pub fn from_args(args: &GdbArgs) -> Result<Self> {
        let root = resolve_config_root(args.config_dir.as_deref())?;
        Self::new(args.port, &args.elf, &root, args.gdb_path.clone())
    }
}

impl ServerConfig {
    pub fn from_args(args: &GdbServerArgs) -> Result<Self> {
        let root = resolve_config_root(args.config_dir.as_deref())?;
        Self::new(&root, args.openocd_path.clone())
    }
}

impl FlashConfig {
    pub fn from_args(args: &LoaderArgs) -> Result<Self> {
        Self::new(args.erase, args.image.clone(), args.programmer_path.clone())
    }
}
