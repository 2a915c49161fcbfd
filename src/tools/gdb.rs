//! `arm-none-eabi-gdb` attach command

use std::ffi::OsString;

use super::{AttachConfig, Launcher};
use crate::command::LaunchCommand;
use crate::platform::Platform;

const GDB_EXECUTABLE: &str = "arm-none-eabi-gdb";

impl Launcher for AttachConfig {
    fn tool(&self) -> &'static str {
        "gdb"
    }

    fn command(&self, platform: Platform) -> LaunchCommand {
        let mut script_arg = OsString::from("--command=");
        script_arg.push(self.script_file());

        LaunchCommand::for_tool(self.tool_path(), platform.executable(GDB_EXECUTABLE))
            .arg(format!("--init-eval-command=target extended-remote :{}", self.port()))
            .arg(script_arg)
            .arg(self.target_file())
    }
}
