use super::emission::{Emission, OutputLine, Placement};
use super::scope::Depth;
use std::io::{self, Write};

/// Output sink plus the block depth, threaded through a transpile run.
pub struct EmitContext<W: Write> {
    out: W,
    depth: Depth,
    indent_unit: String,
    lines_written: usize,
    unmatched_closes: usize,
}

impl<W: Write> EmitContext<W> {
    pub fn new(out: W, indent_width: usize) -> Self {
        Self {
            out,
            depth: Depth::ZERO,
            indent_unit: " ".repeat(indent_width),
            lines_written: 0,
            unmatched_closes: 0,
        }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn unmatched_closes(&self) -> usize {
        self.unmatched_closes
    }

    /// Write an emission's lines and apply its scope effect. A close happens
    /// before writing so `}` lands at the outer level; an open happens after.
    ///
    /// Returns `false` when a close found no open block (depth stays at zero).
    pub fn apply(&mut self, emission: &Emission) -> io::Result<bool> {
        let mut matched = true;
        if emission.closes_scope() {
            match self.depth.close() {
                Some(outer) => self.depth = outer,
                None => {
                    self.unmatched_closes += 1;
                    matched = false;
                }
            }
        }

        for line in &emission.lines {
            self.write_line(line)?;
        }

        if emission.opens_scope() {
            self.depth = self.depth.open();
        }
        Ok(matched)
    }

    /// Raw text outside the per-line rules (file header).
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.lines_written += text.matches('\n').count();
        Ok(())
    }

    fn write_line(&mut self, line: &OutputLine) -> io::Result<()> {
        if line.placement == Placement::Indented && !line.text.is_empty() {
            for _ in 0..self.depth.level() {
                self.out.write_all(self.indent_unit.as_bytes())?;
            }
        }
        self.out.write_all(line.text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{emit_block_end, emit_command, emit_function_open};

    #[test]
    fn block_lines_indent_under_their_opener() {
        let mut ctx = EmitContext::new(Vec::new(), 4);
        ctx.apply(&emit_function_open("int main()")).unwrap();
        ctx.apply(&emit_command(" if(x)")).unwrap();
        ctx.apply(&emit_command(" x = 0")).unwrap();
        ctx.apply(&emit_block_end()).unwrap();
        ctx.apply(&emit_block_end()).unwrap();

        assert_eq!(ctx.depth(), Depth::ZERO);
        assert_eq!(ctx.lines_written(), 5);
        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert_eq!(out, "int main() {\n    if(x) {\n        x = 0;\n    }\n}\n");
    }

    #[test]
    fn unmatched_close_stays_at_zero() {
        let mut ctx = EmitContext::new(Vec::new(), 2);
        assert!(!ctx.apply(&emit_block_end()).unwrap());
        assert_eq!(ctx.depth(), Depth::ZERO);
        assert_eq!(ctx.unmatched_closes(), 1);
        assert_eq!(String::from_utf8(ctx.into_inner()).unwrap(), "}\n");
    }
}
