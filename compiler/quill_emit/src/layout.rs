//! Indentation and line layout.
//!
//! Depth lives in the run's [`EmitConfig`](crate::EmitConfig). The only way to
//! change it is a scoped override ([`EmitContext::indent_further`],
//! [`EmitContext::with_indent_level`]), which restores the previous depth when
//! the closure returns. Siblings emitted afterwards see the original depth.

use crate::context::EmitContext;

impl EmitContext {
    /// Emit indentation for the current depth, then run `f` at that depth.
    pub fn indent<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.emit_indentation();
        f(self)
    }

    /// Like [`EmitContext::indent`], followed by a newline.
    pub fn line<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let result = self.indent(f);
        self.newline();
        result
    }

    /// Run `f` one indent step deeper.
    ///
    /// Depth saturates at `usize::MAX` and is restored after the closure
    /// completes.
    pub fn indent_further<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let level = self.config.indent_level.saturating_add(self.config.indent_step);
        self.with_indent_level(level, f)
    }

    /// Run `f` at exactly `level`, restoring the previous depth afterwards.
    pub fn with_indent_level<R, F>(&mut self, level: usize, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let saved = std::mem::replace(&mut self.config.indent_level, level);
        let result = f(self);
        self.config.indent_level = saved;
        result
    }

    /// Emit a newline if newlines are enabled.
    pub fn newline(&mut self) {
        if self.config.newlines {
            self.emit_static("\n");
        }
    }

    /// Run the header hook `f` if headers are enabled.
    pub fn header<R, F>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self) -> R,
    {
        if self.config.header {
            Some(f(self))
        } else {
            None
        }
    }

    /// Bytes one indentation at the current depth writes.
    #[inline]
    pub fn indent_width(&self) -> usize {
        self.config.indent_width()
    }

    fn emit_indentation(&mut self) {
        let level = self.config.indent_level;
        if level == 0 || self.config.indent_unit.is_empty() {
            return;
        }
        let indentation = self.config.indent_unit.repeat(level);
        self.emit_owned(indentation);
    }
}
