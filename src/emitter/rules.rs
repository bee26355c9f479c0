use super::emission::{DiagnosticKind, Emission, OutputLine};
use crate::parser::{leading_literal_end, parse_command, CommandForm};

pub fn emit_blank() -> Emission {
    Emission::line(OutputLine::flush(""))
}

/// `+include NAME`, `+define NAME VALUE`, anything else becomes a marker comment.
pub fn emit_directive(rest: &str) -> Emission {
    let rest = rest.trim_start();

    if let Some(after) = rest.strip_prefix("include") {
        let Some(name) = after.split_whitespace().next() else {
            return Emission::diagnostic(
                DiagnosticKind::MissingIncludeName,
                format!("+include without a header name: {rest}"),
            );
        };
        let name = name.strip_suffix(';').unwrap_or(name);
        let line = if name.contains(['.', '<', '"']) {
            format!("#include {name}")
        } else {
            format!("#include <{name}.h>")
        };
        return Emission::line(OutputLine::flush(line));
    }

    if let Some(after) = rest.strip_prefix("define") {
        let body = after.trim_start();
        if body.is_empty() {
            return Emission::diagnostic(
                DiagnosticKind::MissingDefineBody,
                "+define without a name".to_string(),
            );
        }
        return Emission::line(OutputLine::flush(format!("#define {body}")));
    }

    Emission::diagnostic(
        DiagnosticKind::UnrecognizedDirective,
        format!("unrecognized + directive: {rest}"),
    )
}

pub fn emit_comment(rest: &str) -> Emission {
    Emission::line(OutputLine::indented(format!("//{rest}")))
}

/// `@int main()` opens a function body at column zero.
pub fn emit_function_open(rest: &str) -> Emission {
    Emission::opening(OutputLine::flush(format!("{} {{", rest.trim_start())))
}

/// `$ string name = "x"` becomes `char *name = "x";`; other types pass through.
pub fn emit_var_decl(rest: &str) -> Emission {
    let decl = rest.trim_start();
    let decl = match decl.strip_prefix("string ") {
        Some(tail) => format!("char *{tail}"),
        None => decl.to_string(),
    };
    Emission::line(OutputLine::indented(terminated(&decl)))
}

/// Body of a `/` or `///` line. Control-flow headers come back tagged as
/// opening a scope; nothing else touches depth.
pub fn emit_command(rest: &str) -> Emission {
    let text = rest.trim_start();

    match parse_command(text) {
        CommandForm::WriteLine { args: Some(args) } => {
            Emission::line(OutputLine::indented(print_call(args, true)))
        }
        CommandForm::WriteLine { args: None } => Emission::diagnostic(
            DiagnosticKind::MalformedWrite,
            format!("unrecognized writeLine usage: {text}"),
        ),
        CommandForm::Write { args: Some(args) } => {
            Emission::line(OutputLine::indented(print_call(args, false)))
        }
        CommandForm::Write { args: None } => Emission::diagnostic(
            DiagnosticKind::MalformedWrite,
            format!("unrecognized write usage: {text}"),
        ),
        CommandForm::Read { target } => Emission::line(OutputLine::indented(format!(
            "scanf(\"%d\", &{target});"
        ))),
        CommandForm::ControlOpen => Emission::opening(OutputLine::indented(format!("{text} {{"))),
        CommandForm::Plain => Emission::line(OutputLine::indented(terminated(text))),
    }
}

/// `// case 1` becomes `case 1:`.
pub fn emit_case_label(rest: &str) -> Emission {
    let label = rest.trim();
    let line = if label.ends_with(':') {
        label.to_string()
    } else {
        format!("{label}:")
    };
    Emission::line(OutputLine::indented(line))
}

pub fn emit_block_end() -> Emission {
    Emission::closing(OutputLine::indented("}"))
}

pub fn emit_passthrough(rest: &str) -> Emission {
    Emission::line(OutputLine::indented(rest))
}

/// `printf` call for `write`/`writeLine` arguments. With `newline`, `\n` goes at
/// the end of the leading format literal; a bare expression is printed via `%s`.
fn print_call(args: &str, newline: bool) -> String {
    if !newline {
        return format!("printf({args});");
    }
    if args.is_empty() {
        return "printf(\"\\n\");".to_string();
    }
    match leading_literal_end(args) {
        Some(close) => {
            let (literal, tail) = args.split_at(close);
            format!("printf({literal}\\n{tail});")
        }
        None => format!("printf(\"%s\\n\", {args});"),
    }
}

fn terminated(text: &str) -> String {
    let text = text.trim_end();
    if text.is_empty() || text.ends_with(';') {
        text.to_string()
    } else {
        format!("{text};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{Placement, ScopeEffect};
    use rstest::rstest;

    fn text(emission: &Emission) -> &str {
        assert_eq!(emission.lines.len(), 1);
        &emission.lines[0].text
    }

    #[rstest]
    #[case("include stdio", "#include <stdio.h>")]
    #[case("include stdio;", "#include <stdio.h>")]
    #[case(" include \"mylib.h\"", "#include \"mylib.h\"")]
    #[case("include <math.h>", "#include <math.h>")]
    #[case("define MAX 10", "#define MAX 10")]
    #[case("define   PI 3.14 // approx", "#define PI 3.14 // approx")]
    fn directives(#[case] rest: &str, #[case] expected: &str) {
        let e = emit_directive(rest);
        assert_eq!(text(&e), expected);
        assert_eq!(e.lines[0].placement, Placement::Flush);
        assert!(e.diagnostic.is_none());
    }

    #[test]
    fn unknown_directive_is_marked_not_failed() {
        let e = emit_directive("pragma once");
        assert_eq!(text(&e), "// unrecognized + directive: pragma once");
        assert_eq!(
            e.diagnostic.map(|d| d.kind),
            Some(DiagnosticKind::UnrecognizedDirective)
        );
    }

    #[test]
    fn include_without_name_is_marked() {
        let e = emit_directive("include");
        assert_eq!(
            e.diagnostic.map(|d| d.kind),
            Some(DiagnosticKind::MissingIncludeName)
        );
    }

    #[rstest]
    #[case(" string name = \"x\";", "char *name = \"x\";")]
    #[case(" string name", "char *name;")]
    #[case("int x = 5", "int x = 5;")]
    #[case(" strings s;", "strings s;")]
    #[case(" String s", "String s;")]
    fn variable_declarations(#[case] rest: &str, #[case] expected: &str) {
        assert_eq!(text(&emit_var_decl(rest)), expected);
    }

    #[rstest]
    #[case(" writeLine(\"Hi\");", "printf(\"Hi\\n\");")]
    #[case(" writeLine(\"x = %d\", x);", "printf(\"x = %d\\n\", x);")]
    #[case(" writeLine(name);", "printf(\"%s\\n\", name);")]
    #[case(" writeLine();", "printf(\"\\n\");")]
    #[case(" write(\"Hi\");", "printf(\"Hi\");")]
    #[case(" write (\"a\", b)", "printf(\"a\", b);")]
    #[case(" read x;", "scanf(\"%d\", &x);")]
    #[case(" x = x + 1", "x = x + 1;")]
    #[case(" return 0;", "return 0;")]
    fn commands(#[case] rest: &str, #[case] expected: &str) {
        let e = emit_command(rest);
        assert_eq!(text(&e), expected);
        assert_eq!(e.scope, ScopeEffect::None);
    }

    #[rstest]
    #[case(" if(x > 0)", "if(x > 0) {")]
    #[case(" for (i = 0; i < 3; i++)", "for (i = 0; i < 3; i++) {")]
    #[case("while(1)", "while(1) {")]
    #[case(" switch(c)", "switch(c) {")]
    fn control_flow_opens_scope(#[case] rest: &str, #[case] expected: &str) {
        let e = emit_command(rest);
        assert_eq!(text(&e), expected);
        assert!(e.opens_scope());
    }

    #[test]
    fn write_without_parenthesis_degrades_to_comment() {
        let e = emit_command(" writeLine \"Hi\"");
        assert_eq!(text(&e), "// unrecognized writeLine usage: writeLine \"Hi\"");
        assert_eq!(
            e.diagnostic.map(|d| d.kind),
            Some(DiagnosticKind::MalformedWrite)
        );
    }

    #[rstest]
    #[case(" case 1", "case 1:")]
    #[case("default", "default:")]
    #[case(" default:", "default:")]
    #[case(" label_a ", "label_a:")]
    fn case_labels(#[case] rest: &str, #[case] expected: &str) {
        assert_eq!(text(&emit_case_label(rest)), expected);
    }

    #[test]
    fn comment_content_is_untouched() {
        assert_eq!(text(&emit_comment("  a | b  @ $")), "//  a | b  @ $");
    }

    #[test]
    fn function_open_and_block_end() {
        let open = emit_function_open("int main()");
        assert_eq!(text(&open), "int main() {");
        assert_eq!(open.scope, ScopeEffect::Open);
        assert_eq!(open.lines[0].placement, Placement::Flush);

        let close = emit_block_end();
        assert_eq!(text(&close), "}");
        assert_eq!(close.scope, ScopeEffect::Close);
        assert!(close.closes_scope() && !close.opens_scope());
    }
}
