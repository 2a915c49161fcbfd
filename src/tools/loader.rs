//! `STM32_Programmer_CLI` erase and write commands

use super::{FlashConfig, FlashMode, Launcher};
use crate::command::LaunchCommand;
use crate::platform::Platform;

const PROGRAMMER_EXECUTABLE: &str = "STM32_Programmer_CLI";

impl Launcher for FlashConfig {
    fn tool(&self) -> &'static str {
        "STM32_Programmer_CLI"
    }

    fn command(&self, platform: Platform) -> LaunchCommand {
        let executable = platform.executable(PROGRAMMER_EXECUTABLE);
        // Serial Wire Debug transport
        let cmd = LaunchCommand::for_tool(self.tool_path(), executable).args(["-c", "port=swd"]);

        match self.mode() {
            FlashMode::Erase => cmd.args(["-e", "all"]),
            FlashMode::Write { image_file } => cmd
                .arg("-w")
                .arg(image_file)
                .arg("-v")
                .arg("-rst"),
        }
    }
}
