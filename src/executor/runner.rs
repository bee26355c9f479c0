use super::summary::{LineDiagnostic, TranspileSummary};
use crate::emitter::{emit_line, Diagnostic, DiagnosticKind, EmitContext};
use crate::error::TranspileError;
use crate::parser::{classify, normalize_line, LineKind};
use std::borrow::Cow;
use std::io::{BufRead, Write};

pub const HEADER: &str = "/* Transpiled C produced by comet */\n\n";

/// Knobs for one transpile run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    pub indent_width: usize,
    pub header: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            header: true,
        }
    }
}

/// Read StarC lines from `input` until EOF and write C to `output`, one line
/// at a time. Only I/O errors stop the run.
pub fn transpile<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    options: &TranspileOptions,
) -> Result<TranspileSummary, TranspileError> {
    let mut ctx = EmitContext::new(output, options.indent_width);
    let mut summary = TranspileSummary::default();

    if options.header {
        ctx.write_raw(HEADER).map_err(TranspileError::Write)?;
    }

    let mut bytes = Vec::new();
    loop {
        bytes.clear();
        let line_no = summary.lines_read + 1;
        let n = input
            .read_until(b'\n', &mut bytes)
            .map_err(|source| TranspileError::Read {
                line: line_no,
                source,
            })?;
        if n == 0 {
            break;
        }
        summary.lines_read = line_no;

        // Non-UTF-8 bytes (Latin-1 comments, string literals) become U+FFFD.
        let raw = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = raw {
            log::warn!("line {line_no}: invalid UTF-8 replaced with U+FFFD");
        }

        let classified = classify(normalize_line(&raw));
        log::debug!("line {line_no}: {:?} {:?}", classified.kind, classified.remainder);

        let emission = emit_line(classified);
        let matched = ctx.apply(&emission).map_err(TranspileError::Write)?;

        if let Some(diagnostic) = emission.diagnostic {
            log::warn!("line {line_no}: {}", diagnostic.message);
            summary.diagnostics.push(LineDiagnostic {
                line: line_no,
                diagnostic,
            });
        }
        if !matched {
            debug_assert_eq!(classified.kind, LineKind::BlockEnd);
            log::warn!("line {line_no}: block end with no open block");
            summary.diagnostics.push(LineDiagnostic {
                line: line_no,
                diagnostic: Diagnostic::new(
                    DiagnosticKind::UnmatchedBlockEnd,
                    "block end with no open block",
                ),
            });
        }
    }

    ctx.flush().map_err(TranspileError::Write)?;

    summary.final_depth = ctx.depth().level();
    summary.unmatched_block_ends = ctx.unmatched_closes();
    summary.lines_written = ctx.lines_written();

    if summary.final_depth > 0 {
        let message = format!("{} block(s) still open at end of input", summary.final_depth);
        log::warn!("{message}");
        summary.diagnostics.push(LineDiagnostic {
            line: summary.lines_read,
            diagnostic: Diagnostic::new(DiagnosticKind::UnclosedBlocks, message),
        });
    }

    log::info!(
        "transpiled {} line(s) into {} line(s), {} diagnostic(s)",
        summary.lines_read,
        summary.lines_written,
        summary.diagnostics.len()
    );
    Ok(summary)
}

/// In-memory convenience over [`transpile`].
pub fn transpile_str(
    source: &str,
    options: &TranspileOptions,
) -> Result<(String, TranspileSummary), TranspileError> {
    let mut out = Vec::new();
    let summary = transpile(source.as_bytes(), &mut out, options)?;
    let text = String::from_utf8(out).map_err(|e| {
        TranspileError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    Ok((text, summary))
}
