use crate::build::Compiler;
use crate::error::ConfigError;
use crate::executor::TranspileOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable holding a compiler command line, e.g. `clang -O2`.
pub const COMPILER_ENV: &str = "COMET_CC";

/// Settings for a `comet` run. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub indent_width: usize,
    pub header: bool,
    pub build: bool,
    pub compiler: String,
    pub compiler_args: Vec<String>,
    /// Flags from the latest `COMET_CC` / `--cc` command, ahead of `compiler_args`.
    #[serde(skip)]
    command_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: 4,
            header: true,
            build: true,
            compiler: "gcc".to_string(),
            compiler_args: Vec::new(),
            command_args: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(path, &text)?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Replace the compiler with a shell-style command line. Words after the
    /// program go in front of `compiler_args` and replace the flags of any
    /// earlier command line.
    pub fn set_compiler_command(&mut self, line: &str) -> Result<(), ConfigError> {
        let Compiler { program, args } = Compiler::from_command_line(line)?;
        self.compiler = program;
        self.command_args = args;
        Ok(())
    }

    /// Apply `COMET_CC` when `value` (its contents) is set and non-empty.
    pub fn apply_env(&mut self, value: Option<String>) -> Result<(), ConfigError> {
        match value {
            Some(line) if !line.trim().is_empty() => {
                log::debug!("{COMPILER_ENV}={line}");
                self.set_compiler_command(&line)
            }
            _ => Ok(()),
        }
    }

    pub fn transpile_options(&self) -> TranspileOptions {
        TranspileOptions {
            indent_width: self.indent_width,
            header: self.header,
        }
    }

    pub fn compiler(&self) -> Compiler {
        Compiler {
            program: self.compiler.clone(),
            args: self
                .command_args
                .iter()
                .chain(&self.compiler_args)
                .cloned()
                .collect(),
        }
    }
}
