//! Launch argument injection
//!
//! Appends the job worker count flag to the host command line unless the
//! caller already set one.

use crate::config::schema::LaunchConfig;

/// Flag/value pair appended to the host command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArgs {
    flag: String,
    worker_count: u32,
}

impl LaunchArgs {
    /// Create launch args for a flag and worker count
    pub fn new(flag: impl Into<String>, worker_count: u32) -> Self {
        Self {
            flag: flag.into(),
            worker_count,
        }
    }

    /// Build from the `[launch]` config section
    pub fn from_config(config: &LaunchConfig) -> Self {
        Self::new(config.flag.clone(), config.worker_count)
    }

    /// The `-<flag> <count>` token pair
    pub fn token(&self) -> String {
        format!("{} {}", self.flag, self.worker_count)
    }

    /// Inject the flag into a command line.
    ///
    /// An absent command line is treated as empty. If the flag already
    /// appears anywhere in the input, the input is returned unchanged.
    pub fn inject(&self, cmd_line: Option<&str>) -> String {
        let cmd_line = cmd_line.unwrap_or("");
        if cmd_line.contains(self.flag.as_str()) {
            return cmd_line.to_string();
        }
        format!("{} {}", cmd_line, self.token())
    }
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self::from_config(&LaunchConfig::default())
    }
}
