/// The nine line shapes of StarC source (plus `Passthrough` for anything else).
///
/// Variants are listed in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    TripleSlashCommand, // ///
    CaseLabel,          // //
    Directive,          // +
    Comment,            // |
    FunctionOpen,       // @
    VarDecl,            // $
    Command,            // /
    BlockEnd,           // \
    Passthrough,
}

impl LineKind {
    /// Prefix that introduces this kind of line, if it has one.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            LineKind::TripleSlashCommand => Some("///"),
            LineKind::CaseLabel => Some("//"),
            LineKind::Directive => Some("+"),
            LineKind::Comment => Some("|"),
            LineKind::FunctionOpen => Some("@"),
            LineKind::VarDecl => Some("$"),
            LineKind::Command => Some("/"),
            LineKind::BlockEnd => Some("\\"),
            LineKind::Blank | LineKind::Passthrough => None,
        }
    }
}

/// Result of classifying one normalized source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    /// Text after the prefix, not trimmed. For `Passthrough` this is the whole
    /// line without its leading whitespace.
    pub remainder: &'a str,
}
