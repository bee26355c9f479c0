use super::scope::ScopeEffect;
use serde::Serialize;

/// Where an output line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Indented to the current block depth.
    Indented,
    /// Column zero regardless of depth (preprocessor lines, function headers).
    Flush,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub placement: Placement,
    pub text: String,
}

impl OutputLine {
    pub fn indented(text: impl Into<String>) -> Self {
        Self {
            placement: Placement::Indented,
            text: text.into(),
        }
    }

    pub fn flush(text: impl Into<String>) -> Self {
        Self {
            placement: Placement::Flush,
            text: text.into(),
        }
    }
}

/// Categories of non-fatal problems found while transpiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnrecognizedDirective,
    MissingIncludeName,
    MissingDefineBody,
    MalformedWrite,
    UnmatchedBlockEnd,
    UnclosedBlocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Everything one source line turns into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Emission {
    pub lines: Vec<OutputLine>,
    pub scope: ScopeEffect,
    pub diagnostic: Option<Diagnostic>,
}

impl Emission {
    pub fn line(line: OutputLine) -> Self {
        Self {
            lines: vec![line],
            ..Self::default()
        }
    }

    pub fn opening(line: OutputLine) -> Self {
        Self {
            lines: vec![line],
            scope: ScopeEffect::Open,
            diagnostic: None,
        }
    }

    pub fn closing(line: OutputLine) -> Self {
        Self {
            lines: vec![line],
            scope: ScopeEffect::Close,
            diagnostic: None,
        }
    }

    /// A visible `//` comment standing in for a line that could not be converted.
    pub fn diagnostic(kind: DiagnosticKind, comment: String) -> Self {
        Self {
            lines: vec![OutputLine::indented(format!("// {comment}"))],
            scope: ScopeEffect::None,
            diagnostic: Some(Diagnostic::new(kind, comment)),
        }
    }

    pub fn opens_scope(&self) -> bool {
        self.scope == ScopeEffect::Open
    }

    pub fn closes_scope(&self) -> bool {
        self.scope == ScopeEffect::Close
    }
}
