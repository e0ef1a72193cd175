//! Emission Context
//!
//! [`EmitContext`] is the only interface tree-node rendering talks to. It
//! combines three pieces of state with different lifetimes:
//!
//! - the [`EmitConfig`], read-only except for scoped depth overrides
//!   (see the layout methods in [`crate::layout`]);
//! - the run-wide [`UniqueNames`] store, written once per distinct variable
//!   and never reset by scoping;
//! - the [`Fragments`] collection, appended to in call order.
//!
//! # Example
//!
//! ```
//! use quill_emit::{run, EmitConfig, Var};
//!
//! let f = Var::external("M", "f");
//! let ((), text) = run(EmitConfig::pretty(), |ctx| {
//!     ctx.line(|ctx| {
//!         ctx.emit("call ");
//!         ctx.emit_var(&f);
//!     });
//! });
//! assert_eq!(text, "call _0/*M.f*/\n");
//! ```

use crate::config::EmitConfig;
use crate::fragments::{Emitter, Fragments};
use crate::render::Render;
use crate::unique::UniqueNames;
use crate::var::Var;

/// Run one emission from fresh state and return its result and output text.
///
/// The unique-name store and fragment collection are created here and
/// dropped when the run ends, so labels from separate runs are unrelated.
/// Output from different runs must not be combined unless the caller
/// renumbers them itself.
///
/// Generated labels are collision-free among themselves only. Foreign
/// variables are emitted verbatim, so callers must not give them names of
/// the form `_[0-9a-zA-Z]+`; nothing here checks that.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<R, F>(config: EmitConfig, f: F) -> (R, String)
where
    F: FnOnce(&mut EmitContext) -> R,
{
    let mut ctx = EmitContext::new(config);
    let result = f(&mut ctx);
    let (text, _) = ctx.finish();
    (result, text)
}

/// Render `node` in a fresh run and return the text.
pub fn render_to_string<T: Render + ?Sized>(config: EmitConfig, node: &T) -> String {
    run(config, |ctx| node.render(ctx)).1
}

/// State of one emission run.
pub struct EmitContext {
    pub(crate) config: EmitConfig,
    names: UniqueNames,
    out: Fragments,
}

impl EmitContext {
    /// Create a context with a fresh store and empty output.
    ///
    /// Prefer [`run`]; this is for callers that drive a run by hand and finish
    /// it with [`EmitContext::finish`].
    pub fn new(config: EmitConfig) -> Self {
        Self {
            config,
            names: UniqueNames::new(),
            out: Fragments::with_capacity(256),
        }
    }

    /// Get the current configuration, including any active depth override.
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Get the unique-name store.
    pub fn names(&self) -> &UniqueNames {
        &self.names
    }

    /// Get the output emitted so far.
    pub fn output(&self) -> &Fragments {
        &self.out
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.out.emit(text);
    }

    /// Emit an owned text fragment without copying it.
    pub fn emit_owned(&mut self, text: String) {
        self.out.emit_owned(text);
    }

    /// Emit a static text fragment without copying it.
    pub fn emit_static(&mut self, text: &'static str) {
        self.out.emit_static(text);
    }

    /// Append a previously captured collection.
    pub fn emit_fragments(&mut self, fragments: Fragments) {
        self.out.append(fragments);
    }

    /// Label of `var` under the configured naming strategy.
    pub fn name(&mut self, var: &Var) -> String {
        self.config.naming.label(var, &mut self.names)
    }

    /// Emit the label of `var`.
    pub fn emit_var(&mut self, var: &Var) {
        let label = self.name(var);
        self.out.emit_owned(label);
    }

    /// Render a node into this context.
    pub fn render<T: Render + ?Sized>(&mut self, node: &T) {
        node.render(self);
    }

    /// Run `f` against an empty fragment collection and return what it emitted.
    ///
    /// Configuration and the unique-name store are shared with the caller, so
    /// labels allocated inside stay valid after the captured text is spliced
    /// back with [`EmitContext::emit_fragments`].
    pub fn capture<R, F>(&mut self, f: F) -> (R, Fragments)
    where
        F: FnOnce(&mut Self) -> R,
    {
        let outer = std::mem::take(&mut self.out);
        let result = f(self);
        let inner = std::mem::replace(&mut self.out, outer);
        (result, inner)
    }

    /// End the run: flatten the output and hand back the store.
    pub fn finish(self) -> (String, UniqueNames) {
        tracing::debug!(
            fragments = self.out.fragment_count(),
            bytes = self.out.len(),
            names = self.names.len(),
            "emission finished"
        );
        (self.out.flatten(), self.names)
    }
}
