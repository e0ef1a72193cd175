//! Quill Source Emission
//!
//! Turns an already-built target-program tree into source text. Nodes render
//! themselves through an [`EmitContext`]; the context handles layout, output
//! accumulation, and variable naming.
//!
//! # Architecture
//!
//! ```text
//!   Render impls (tree nodes, outside this crate)
//!        ↓ emit / indent / line / indent_further / emit_var
//!   EmitContext ── EmitConfig   (read-only, scoped depth override)
//!        │      ── UniqueNames  (run-wide, write-once per variable)
//!        │      ── Fragments    (append-only, flattened once)
//!        ↓
//!   (result, String)
//! ```
//!
//! Variable labels are chosen by a [`Naming`] strategy. The `pretty` and
//! `compact` presets rename every non-foreign variable to an allocator label
//! (`_0`, `_1`, ...), so renaming cannot capture or shadow anything; `pseudo`
//! keeps source names for reading. Foreign variables are never renamed, so
//! they must not use names of the label form `_[0-9a-zA-Z]+`.
//!
//! # Modules
//!
//! - [`var`]: variable identities and their origin tags
//! - [`unique`]: the memoized allocator and label encoding
//! - [`naming`]: naming strategies and combinators
//! - [`config`]: run configuration and presets
//! - [`fragments`]: output accumulation
//! - [`context`]: the emission context and [`run`]
//! - [`layout`]: indentation and newline handling
//! - [`render`]: the [`Render`] trait

pub mod config;
pub mod context;
pub mod fragments;
pub mod layout;
pub mod naming;
pub mod render;
pub mod unique;
pub mod var;

pub use config::{EmitConfig, ParsePresetError, Preset, INDENT_STEP, INDENT_UNIT};
pub use context::{render_to_string, run, EmitContext};
pub use fragments::{Emitter, Fragments};
pub use naming::Naming;
pub use render::{render_sep, Render};
pub use unique::{label, UniqueNames};
pub use var::{Origin, Var};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=quill_emit=debug` for run summaries or `=trace` for every
/// name allocation.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
