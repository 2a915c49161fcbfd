//! Constructed command lines for the external tools

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use tokio::process::Command;

/// An external program plus its argument list, built before anything runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Program named by the tool override, or the platform executable name
    pub fn for_tool(tool_path: Option<&Path>, executable: String) -> Self {
        match tool_path {
            Some(path) => Self::new(path),
            None => Self::new(executable),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    #[cfg(test)]
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as lossy UTF-8 for assertions
    #[cfg(test)]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_joins_with_spaces() {
        let cmd = LaunchCommand::new("openocd").args(["-f", "openocd.cfg"]);
        assert_eq!(cmd.to_string(), "openocd -f openocd.cfg");
    }

    #[test]
    fn test_for_tool_prefers_override() {
        let path = PathBuf::from("/opt/st/bin/STM32_Programmer_CLI");
        let cmd = LaunchCommand::for_tool(
            Some(path.as_path()),
            "STM32_Programmer_CLI.exe".to_string(),
        );
        assert_eq!(cmd.program(), path.as_os_str());

        let cmd = LaunchCommand::for_tool(None, "STM32_Programmer_CLI.exe".to_string());
        assert_eq!(cmd.program(), "STM32_Programmer_CLI.exe");
    }

    #[test]
    fn test_args_keep_order() {
        let cmd = LaunchCommand::new("tool").arg("a").args(["b", "c"]).arg("d");
        assert_eq!(cmd.args_lossy(), vec!["a", "b", "c", "d"]);
    }
}
