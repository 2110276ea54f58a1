//! Process boundary.
//!
//! The annotator is dispatched as one blocking call. Its output is never
//! captured; the streams are either left attached to ours or, for stdout
//! with build output hidden, discarded.

use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use super::invocation::InvocationCommand;
use crate::core::{Error, Result};

/// How the annotator's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// stdout and stderr attached to the driver's own streams
    Inherit,
    /// stdout discarded, stderr attached
    Quiet,
}

impl OutputMode {
    pub fn from_show_build_output(show: bool) -> Self {
        if show {
            Self::Inherit
        } else {
            Self::Quiet
        }
    }
}

/// Exit status of the annotator, passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Terminating signal on Unix
    pub signal: Option<i32>,
}

impl ToolExit {
    pub const SUCCESS: ToolExit = ToolExit {
        code: Some(0),
        signal: None,
    };

    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Code for the driver's own exit: the tool's code, `128 + signal`
    /// for a signal, otherwise 1.
    pub fn process_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(signal)) => 128 + signal,
            (None, None) => 1,
        }
    }
}

impl From<ExitStatus> for ToolExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

/// Executes an invocation command and waits for it.
pub trait CommandRunner {
    fn run(&self, command: &InvocationCommand, mode: OutputMode) -> Result<ToolExit>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &InvocationCommand, mode: OutputMode) -> Result<ToolExit> {
        let stdout = match mode {
            OutputMode::Inherit => Stdio::inherit(),
            OutputMode::Quiet => Stdio::null(),
        };

        info!(command = %command, "Starting annotator");
        let status = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        let exit = ToolExit::from(status);
        debug!(code = ?exit.code, signal = ?exit.signal, "Annotator finished");
        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_toggle() {
        assert_eq!(OutputMode::from_show_build_output(true), OutputMode::Inherit);
        assert_eq!(OutputMode::from_show_build_output(false), OutputMode::Quiet);
    }

    #[test]
    fn test_process_code_passthrough() {
        assert_eq!(ToolExit::SUCCESS.process_code(), 0);
        assert!(ToolExit::SUCCESS.success());
        assert_eq!(ToolExit::from_code(3).process_code(), 3);
        assert!(!ToolExit::from_code(3).success());
    }

    #[test]
    fn test_process_code_for_signal() {
        let killed = ToolExit {
            code: None,
            signal: Some(9),
        };
        assert_eq!(killed.process_code(), 137);
        assert!(!killed.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_exit_status() {
        use std::os::unix::process::ExitStatusExt;
        let exit = ToolExit::from(ExitStatus::from_raw(2 << 8));
        assert_eq!(exit.code, Some(2));
        assert_eq!(exit.signal, None);
    }
}
