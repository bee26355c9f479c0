mod context;
mod emission;
mod rules;
mod scope;

pub use context::EmitContext;
pub use emission::{Diagnostic, DiagnosticKind, Emission, OutputLine, Placement};
pub use rules::{
    emit_blank, emit_block_end, emit_case_label, emit_command, emit_comment, emit_directive,
    emit_function_open, emit_passthrough, emit_var_decl,
};
pub use scope::{Depth, ScopeEffect};

use crate::parser::{ClassifiedLine, LineKind};

/// Route a classified line to its emitter. `///` bodies go through the same
/// command rule as `/`, so both honour the scope tag.
pub fn emit_line(line: ClassifiedLine<'_>) -> Emission {
    let rest = line.remainder;
    match line.kind {
        LineKind::Blank => emit_blank(),
        LineKind::TripleSlashCommand | LineKind::Command => emit_command(rest),
        LineKind::CaseLabel => emit_case_label(rest),
        LineKind::Directive => emit_directive(rest),
        LineKind::Comment => emit_comment(rest),
        LineKind::FunctionOpen => emit_function_open(rest),
        LineKind::VarDecl => emit_var_decl(rest),
        LineKind::BlockEnd => emit_block_end(),
        LineKind::Passthrough => emit_passthrough(rest),
    }
}
