//! Naming strategies.
//!
//! A [`Naming`] maps a [`Var`] to the text emitted for it. Two primitives
//! exist, [`Naming::Qualified`] (readable, origin-preserving) and
//! [`Naming::Unique`] (allocator-backed, collision-free). Combinators wrap
//! strategies to add annotations or concatenate labels.
//!
//! # Presets
//!
//! | Preset | Strategy | `M.f` (first) | `x` (second) |
//! |---|---|---|---|
//! | [`Naming::pseudo`] | `Qualified` | `M.f` | `x` |
//! | [`Naming::pretty`] | `append(comment_external(Qualified), Unique)` | `_0/*M.f*/` | `_1` |
//! | [`Naming::compact`] | `Unique` | `_0` | `_1` |
//!
//! Only `pretty` and `compact` guarantee valid, collision-free identifiers;
//! `pseudo` output is for inspection. The guarantee covers allocator labels
//! only: foreign names pass through unchanged, so a foreign name of the form
//! `_[0-9a-zA-Z]+` can coincide with a generated label.

use crate::unique::{label_into, UniqueNames};
use crate::var::Var;

/// Opening delimiter for label annotations.
pub const COMMENT_OPEN: &str = "/*";

/// Closing delimiter for label annotations.
pub const COMMENT_CLOSE: &str = "*/";

/// Strategy computing the label of a variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Naming {
    /// `module.name` for external variables, the bare name otherwise.
    Qualified,
    /// Allocator label (`_0`, `_1`, ...). Foreign variables keep their name.
    ///
    /// Labels are distinct from each other, not from foreign names: a foreign
    /// `_0` and the first allocated variable both render as `_0`. Callers must
    /// not give foreign variables names of the form `_[0-9a-zA-Z]+`.
    Unique,
    /// Inner label wrapped in `/*` `*/`.
    Comment(Box<Naming>),
    /// Like [`Naming::Comment`] for external variables; empty otherwise.
    CommentExternal(Box<Naming>),
    /// `front` followed by `back`, evaluated in that order.
    Append { back: Box<Naming>, front: Box<Naming> },
}

impl Naming {
    /// Wrap `inner` in comment delimiters.
    pub fn comment(inner: Naming) -> Self {
        Naming::Comment(Box::new(inner))
    }

    /// Wrap `inner` in comment delimiters, for external variables only.
    pub fn comment_external(inner: Naming) -> Self {
        Naming::CommentExternal(Box::new(inner))
    }

    /// Run `front`, then `back`, and concatenate their labels.
    pub fn append(back: Naming, front: Naming) -> Self {
        Naming::Append {
            back: Box::new(back),
            front: Box::new(front),
        }
    }

    /// Human-readable names; not guaranteed valid or collision-free.
    pub fn pseudo() -> Self {
        Naming::Qualified
    }

    /// Unique labels annotated with the qualified origin of imports.
    pub fn pretty() -> Self {
        Naming::append(Naming::comment_external(Naming::Qualified), Naming::Unique)
    }

    /// Unique labels only.
    pub fn compact() -> Self {
        Naming::Unique
    }

    /// Compute the label for `var`, allocating in `names` as needed.
    pub fn label(&self, var: &Var, names: &mut UniqueNames) -> String {
        let mut out = String::new();
        self.label_into(var, names, &mut out);
        out
    }

    /// Append the label for `var` to `out`.
    pub fn label_into(&self, var: &Var, names: &mut UniqueNames, out: &mut String) {
        match self {
            Naming::Qualified => var.write_qualified(out),
            Naming::Unique => {
                if var.is_foreign() {
                    out.push_str(var.name());
                } else {
                    label_into(names.allocate(var), out);
                }
            }
            Naming::Comment(inner) => {
                out.push_str(COMMENT_OPEN);
                inner.label_into(var, names, out);
                out.push_str(COMMENT_CLOSE);
            }
            Naming::CommentExternal(inner) => {
                if var.is_external() {
                    out.push_str(COMMENT_OPEN);
                    inner.label_into(var, names, out);
                    out.push_str(COMMENT_CLOSE);
                }
            }
            Naming::Append { back, front } => {
                front.label_into(var, names, out);
                back.label_into(var, names, out);
            }
        }
    }

    /// Check whether this strategy can consult the allocator.
    pub fn allocates(&self) -> bool {
        match self {
            Naming::Qualified => false,
            Naming::Unique => true,
            Naming::Comment(inner) | Naming::CommentExternal(inner) => inner.allocates(),
            Naming::Append { back, front } => back.allocates() || front.allocates(),
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Naming::pretty()
    }
}
