//! `openocd` GDB server command

use super::{InterruptPolicy, Launcher, ServerConfig};
use crate::command::LaunchCommand;
use crate::platform::Platform;

const OPENOCD_EXECUTABLE: &str = "openocd";

impl Launcher for ServerConfig {
    fn tool(&self) -> &'static str {
        "openocd"
    }

    fn command(&self, platform: Platform) -> LaunchCommand {
        LaunchCommand::for_tool(self.tool_path(), platform.executable(OPENOCD_EXECUTABLE))
            .arg("-f")
            .arg(self.script_file())
    }

    // The server only stops on Ctrl-C, which is a normal way to end a session.
    fn interrupt_policy(&self) -> InterruptPolicy {
        InterruptPolicy::CleanExit
    }
}
