//! Variable identities.
//!
//! A [`Var`] names one variable of the generated program. The tree-building
//! layer constructs them; this crate only reads the origin tag when choosing
//! a label.

use std::fmt;

/// Identity of one variable in the generated program.
///
/// Compared structurally, so two `Var`s built from the same parts denote the
/// same variable and receive the same label within a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Var {
    /// Qualified import from another module (`module.name`).
    External { module: String, name: String },
    /// Name scoped to the generated program.
    Internal(String),
    /// Name supplied by the host environment; always rendered verbatim.
    Foreign(String),
}

/// Origin tag of a [`Var`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    External,
    Internal,
    Foreign,
}

impl Var {
    /// Create an external (imported) variable.
    pub fn external(module: impl Into<String>, name: impl Into<String>) -> Self {
        Var::External {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Create a program-internal variable.
    pub fn internal(name: impl Into<String>) -> Self {
        Var::Internal(name.into())
    }

    /// Create a foreign variable.
    pub fn foreign(name: impl Into<String>) -> Self {
        Var::Foreign(name.into())
    }

    /// The origin tag.
    #[inline]
    pub fn origin(&self) -> Origin {
        match self {
            Var::External { .. } => Origin::External,
            Var::Internal(_) => Origin::Internal,
            Var::Foreign(_) => Origin::Foreign,
        }
    }

    /// The unqualified name.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Var::External { name, .. } | Var::Internal(name) | Var::Foreign(name) => name,
        }
    }

    /// The defining module, for external variables.
    #[inline]
    pub fn module(&self) -> Option<&str> {
        match self {
            Var::External { module, .. } => Some(module),
            Var::Internal(_) | Var::Foreign(_) => None,
        }
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Var::External { .. })
    }

    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Var::Foreign(_))
    }

    /// Append the qualified spelling (`module.name` or `name`) to `out`.
    pub fn write_qualified(&self, out: &mut String) {
        if let Var::External { module, .. } = self {
            out.push_str(module);
            out.push('.');
        }
        out.push_str(self.name());
    }
}

/// Displays the qualified spelling.
impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::External { module, name } => write!(f, "{module}.{name}"),
            Var::Internal(name) | Var::Foreign(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests;
