//! Annotator command line assembly.
//!
//! Token order is fixed so that logged invocations are reproducible:
//!
//! ```text
//! <java> -jar <jar> -d <workspace> -bc <build> -cp <manifest>
//!     -i <initializer> -n <qualifier> -cn <context>
//!     [--depth <n>] [-dol] [-dpp] [-rboserr]
//! ```

use std::fmt;

use serde::Serialize;

use super::location::AnalyzerTool;
use crate::config::RunConfig;
use crate::workspace::PreparedWorkspace;

pub const FLAG_WORKSPACE: &str = "-d";
pub const FLAG_BUILD_COMMAND: &str = "-bc";
pub const FLAG_MANIFEST: &str = "-cp";
pub const FLAG_INITIALIZER: &str = "-i";
pub const FLAG_QUALIFIER: &str = "-n";
pub const FLAG_CONTEXT_NAME: &str = "-cn";
pub const FLAG_DEPTH: &str = "--depth";
pub const FLAG_DISABLE_OUTER_LOOP: &str = "-dol";
pub const FLAG_DISABLE_PARALLEL: &str = "-dpp";
pub const FLAG_SHOW_BUILD_OUTPUT: &str = "-rboserr";

/// Argument vector for one annotator run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvocationCommand {
    tokens: Vec<String>,
}

impl InvocationCommand {
    pub fn build(tool: &AnalyzerTool, run: &RunConfig, workspace: &PreparedWorkspace) -> Self {
        let mut tokens = tool.launch_prefix();

        let required = [
            (FLAG_WORKSPACE, workspace.root().display().to_string()),
            (FLAG_BUILD_COMMAND, run.build_command_in_repository()),
            (FLAG_MANIFEST, workspace.manifest_path().display().to_string()),
            (FLAG_INITIALIZER, run.initializer.clone()),
            (FLAG_QUALIFIER, run.taint_qualifier.clone()),
            (FLAG_CONTEXT_NAME, run.context_name.clone()),
        ];
        for (flag, value) in required {
            tokens.push(flag.to_string());
            tokens.push(value);
        }

        if let Some(depth) = run.depth {
            tokens.push(FLAG_DEPTH.to_string());
            tokens.push(depth.to_string());
        }
        if !run.outer_loop {
            tokens.push(FLAG_DISABLE_OUTER_LOOP.to_string());
        }
        if !run.parallel {
            tokens.push(FLAG_DISABLE_PARALLEL.to_string());
        }
        if run.show_build_output {
            tokens.push(FLAG_SHOW_BUILD_OUTPUT.to_string());
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Value following `flag`, if the flag is present
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.tokens
            .iter()
            .position(|t| t == flag)
            .and_then(|i| self.tokens.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for InvocationCommand {
    /// Shell-like rendering for logs; tokens with whitespace are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if token.is_empty() || token.contains(char::is_whitespace) {
                write!(f, "'{}'", token.replace('\'', r"'\''"))?;
            } else {
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}
