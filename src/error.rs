use std::path::PathBuf;

/// Fatal failures of a transpile run. Malformed lines never land here; they
/// become diagnostic comments in the output.
#[derive(Debug, thiserror::Error)]
pub enum TranspileError {
    #[error("failed to read input line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot parse compiler command `{0}`")]
    CompilerCommand(String),
    #[error("cannot write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} compilation failed with code {}", status_text(.code))]
    Failed { program: String, code: Option<i32> },
}

// Killed by a signal on Unix leaves no exit code.
fn status_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Top-level failure of a `comet` invocation, mapped to a process exit code.
#[derive(Debug, thiserror::Error)]
pub enum CometError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot open input {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open output {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Transpile(#[from] TranspileError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl CometError {
    pub const EXIT_USAGE: i32 = 1;
    pub const EXIT_INPUT: i32 = 2;
    pub const EXIT_OUTPUT: i32 = 3;
    pub const EXIT_BUILD: i32 = 4;

    pub fn exit_code(&self) -> i32 {
        match self {
            CometError::Config(_) => Self::EXIT_USAGE,
            CometError::InputOpen { .. } => Self::EXIT_INPUT,
            CometError::Transpile(TranspileError::Read { .. }) => Self::EXIT_INPUT,
            CometError::OutputOpen { .. } => Self::EXIT_OUTPUT,
            CometError::Transpile(TranspileError::Write(_)) => Self::EXIT_OUTPUT,
            CometError::Build(_) => Self::EXIT_BUILD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exit_codes_are_distinct_per_failure_kind() {
        let io_err = || io::Error::new(io::ErrorKind::NotFound, "nope");
        let cases = [
            (
                CometError::Config(ConfigError::CompilerCommand("'".into())),
                1,
            ),
            (
                CometError::InputOpen {
                    path: "a.sc".into(),
                    source: io_err(),
                },
                2,
            ),
            (
                CometError::OutputOpen {
                    path: "a.c".into(),
                    source: io_err(),
                },
                3,
            ),
            (
                CometError::Build(BuildError::Failed {
                    program: "gcc".into(),
                    code: Some(1),
                }),
                4,
            ),
            (CometError::Transpile(TranspileError::Write(io_err())), 3),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
        }
    }

    #[test]
    fn build_failure_message_carries_status() {
        let err = BuildError::Failed {
            program: "gcc".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "gcc compilation failed with code 1");
    }
}
