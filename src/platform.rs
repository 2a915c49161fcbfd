//! Host platform capabilities that affect command construction

/// Platform the external tools are launched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Suffix carried by executables on this platform
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Unix => "",
        }
    }

    /// Executable name for a tool, e.g. `openocd` -> `openocd.exe` on Windows
    pub fn executable(self, stem: &str) -> String {
        format!("{}{}", stem, self.exe_suffix())
    }
}
