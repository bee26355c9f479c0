use super::preprocessor::is_blank;
use super::types::{ClassifiedLine, LineKind};

/// Prefixes tested after the blank check, longest first so `///` never reads
/// as `//` and `//` never reads as two `/` commands.
const PREFIX_ORDER: [LineKind; 8] = [
    LineKind::TripleSlashCommand,
    LineKind::CaseLabel,
    LineKind::Directive,
    LineKind::Comment,
    LineKind::FunctionOpen,
    LineKind::VarDecl,
    LineKind::Command,
    LineKind::BlockEnd,
];

/// Classify a normalized (right-trimmed) line. Total: every line gets exactly
/// one kind, unknown prefixes fall through to `Passthrough`.
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    if is_blank(line) {
        return ClassifiedLine {
            kind: LineKind::Blank,
            remainder: "",
        };
    }

    let text = line.trim_start();
    for kind in PREFIX_ORDER {
        let Some(prefix) = kind.prefix() else {
            continue;
        };
        if let Some(remainder) = text.strip_prefix(prefix) {
            return ClassifiedLine { kind, remainder };
        }
    }

    ClassifiedLine {
        kind: LineKind::Passthrough,
        remainder: text,
    }
}
