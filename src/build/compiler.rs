use super::{artifact_path, BuildOutcome, BuildStep};
use crate::error::{BuildError, ConfigError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Native C compiler invoked as `<program> <args...> <source> -o <artifact>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            program: "gcc".to_string(),
            args: Vec::new(),
        }
    }
}

impl Compiler {
    /// Parse a shell-style command such as `clang -O2 -Wall`.
    pub fn from_command_line(line: &str) -> Result<Self, ConfigError> {
        let words = shlex::split(line).ok_or_else(|| ConfigError::CompilerCommand(line.into()))?;
        let mut words = words.into_iter();
        let program = words
            .next()
            .ok_or_else(|| ConfigError::CompilerCommand(line.into()))?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    fn command_for(&self, source: &Path, artifact: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(source)
            .arg("-o")
            .arg(artifact)
            .stdin(Stdio::null());
        cmd
    }

    /// Human-readable command line, quoted the way a shell would need it.
    pub fn describe(&self, source: &Path, artifact: &Path) -> String {
        let source = source.to_string_lossy();
        let artifact = artifact.to_string_lossy();
        let words = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain([source.as_ref(), "-o", artifact.as_ref()]);
        shlex::try_join(words).unwrap_or_else(|_| {
            format!("{} {} -o {}", self.program, source, artifact)
        })
    }
}

impl BuildStep for Compiler {
    fn compile(&self, source: &Path) -> Result<BuildOutcome, BuildError> {
        let artifact = artifact_path(source);
        log::info!("running {}", self.describe(source, &artifact));

        let status = self
            .command_for(source, &artifact)
            .status()
            .map_err(|source| BuildError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::Failed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(BuildOutcome { artifact })
    }
}
