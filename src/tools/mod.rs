//! The three launchers: gdb attach, openocd GDB server and the STM32 loader

pub mod gdb;
pub mod gdb_server;
pub mod loader;
pub mod types;

pub use types::*;

use crate::command::LaunchCommand;
use crate::platform::Platform;

/// What the runner does when the operator presses Ctrl-C
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptPolicy {
    /// Leave the interrupt to the child and keep waiting for its exit status
    Passthrough,
    /// Stop the child and report a clean exit (status 0)
    CleanExit,
}

/// A validated launch configuration that knows how to build its command
pub trait Launcher {
    /// Tool name used in log output
    fn tool(&self) -> &'static str;

    /// Build the external command. Pure in `(self, platform)`.
    fn command(&self, platform: Platform) -> LaunchCommand;

    fn interrupt_policy(&self) -> InterruptPolicy {
        InterruptPolicy::Passthrough
    }
}
