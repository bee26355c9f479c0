/// Keywords that open a nested block when they start a command line.
pub const CONTROL_KEYWORDS: [&str; 4] = ["if", "for", "while", "switch"];

/// Shape of the text following `/` or `///`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandForm<'a> {
    /// `writeLine(...)`; `args` is `None` when no `(` was found.
    WriteLine { args: Option<&'a str> },
    /// `write(...)`; `args` is `None` when no `(` was found.
    Write { args: Option<&'a str> },
    /// `read NAME`
    Read { target: &'a str },
    /// `if` / `for` / `while` / `switch` header
    ControlOpen,
    Plain,
}

/// Determine the command form of an already left-trimmed command body.
pub fn parse_command(text: &str) -> CommandForm<'_> {
    if starts_with_word(text, "writeLine") {
        return CommandForm::WriteLine {
            args: call_arguments(text),
        };
    }
    if starts_with_word(text, "write") {
        return CommandForm::Write {
            args: call_arguments(text),
        };
    }
    if let Some(rest) = text.strip_prefix("read ") {
        let name = rest.trim();
        let name = name.strip_suffix(';').unwrap_or(name).trim_end();
        return CommandForm::Read { target: name };
    }
    if is_control_open(text) {
        return CommandForm::ControlOpen;
    }
    CommandForm::Plain
}

/// True for `if(...)`, `for (...)` and friends, false for `format(...)` or `iffy`.
pub fn is_control_open(text: &str) -> bool {
    CONTROL_KEYWORDS
        .iter()
        .any(|kw| starts_with_word(text, kw))
}

/// `word` followed by a space or an opening parenthesis.
fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('('))
}

/// Text between the first `(` and the matching final `)` of a call, with one
/// trailing `;` ignored. A missing `)` keeps everything after `(`.
pub fn call_arguments(text: &str) -> Option<&str> {
    let open = text.find('(')?;
    let inner = text[open + 1..].trim_end();
    let inner = inner.strip_suffix(';').unwrap_or(inner).trim_end();
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    Some(inner.trim())
}

/// Byte index of the closing quote of the string literal that opens `args`,
/// honoring backslash escapes. `None` when `args` does not start with `"` or the
/// literal is unterminated.
pub fn leading_literal_end(args: &str) -> Option<usize> {
    let mut chars = args.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }

    let mut escaped = false;
    for (i, ch) in chars {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}
