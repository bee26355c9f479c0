mod runner;
mod summary;

pub use runner::{transpile, transpile_str, TranspileOptions, HEADER};
pub use summary::{LineDiagnostic, TranspileSummary};
