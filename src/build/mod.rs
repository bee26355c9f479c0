mod compiler;

pub use compiler::Compiler;

use crate::error::BuildError;
use std::path::{Path, PathBuf};

#[cfg(windows)]
pub const EXE_SUFFIX: &str = ".exe";
#[cfg(not(windows))]
pub const EXE_SUFFIX: &str = ".out";

/// Successful build result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub artifact: PathBuf,
}

/// Turns a generated C file into an executable. Runs only after the output
/// file is complete and closed.
pub trait BuildStep {
    fn compile(&self, source: &Path) -> Result<BuildOutcome, BuildError>;
}

/// Executable path for a generated source: the source path plus the
/// platform suffix (`prog.c` -> `prog.c.out`).
pub fn artifact_path(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(EXE_SUFFIX);
    PathBuf::from(name)
}
