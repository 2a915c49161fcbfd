//! MCU Launch
//!
//! Launchers for STM32 embedded tooling: attach `arm-none-eabi-gdb` to a
//! debug server, start `openocd` as that server, and flash or erase the
//! target with `STM32_Programmer_CLI`.

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod runner;
pub mod tools;

pub use command::LaunchCommand;
pub use config::{GdbArgs, GdbServerArgs, LoaderArgs, LogArgs};
pub use error::{LaunchError, Result};
pub use platform::Platform;
pub use tools::{AttachConfig, FlashConfig, FlashMode, InterruptPolicy, Launcher, ServerConfig};
