//! Emission configuration.
//!
//! [`EmitConfig`] is the read-only policy of one run: layout settings plus the
//! naming strategy. Three presets cover the usual cases; the `with_*` methods
//! derive variants from them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::naming::Naming;

/// Default indentation step for the readable presets.
pub const INDENT_STEP: usize = 4;

/// Default indentation unit for the readable presets.
pub const INDENT_UNIT: &str = " ";

/// Configuration for an emission run.
///
/// `indent_level` is the only field that changes during a run, and only for
/// the extent of a scoped override (see [`EmitContext::indent_further`]).
///
/// [`EmitContext::indent_further`]: crate::EmitContext::indent_further
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitConfig {
    /// Current depth, in indent units.
    pub indent_level: usize,
    /// Units added by one `indent_further`.
    pub indent_step: usize,
    /// Text emitted once per unit of depth.
    pub indent_unit: Cow<'static, str>,
    /// Whether `line` and `newline` emit `\n`.
    pub newlines: bool,
    /// Whether the header hook runs.
    pub header: bool,
    /// Strategy for variable labels.
    pub naming: Naming,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::pretty()
    }
}

impl EmitConfig {
    /// Readable, unrenamed output for inspecting generated code.
    pub fn pseudo() -> Self {
        Self {
            indent_level: 0,
            indent_step: INDENT_STEP,
            indent_unit: Cow::Borrowed(INDENT_UNIT),
            newlines: true,
            header: false,
            naming: Naming::pseudo(),
        }
    }

    /// Executable, laid-out output with imports annotated.
    pub fn pretty() -> Self {
        Self {
            indent_level: 0,
            indent_step: INDENT_STEP,
            indent_unit: Cow::Borrowed(INDENT_UNIT),
            newlines: true,
            header: true,
            naming: Naming::pretty(),
        }
    }

    /// Executable output on a single line with no added whitespace.
    pub fn compact() -> Self {
        Self {
            indent_level: 0,
            indent_step: 0,
            indent_unit: Cow::Borrowed(""),
            newlines: false,
            header: true,
            naming: Naming::compact(),
        }
    }

    #[must_use]
    pub fn with_indent_level(mut self, indent_level: usize) -> Self {
        self.indent_level = indent_level;
        self
    }

    #[must_use]
    pub fn with_indent_step(mut self, indent_step: usize) -> Self {
        self.indent_step = indent_step;
        self
    }

    #[must_use]
    pub fn with_indent_unit(mut self, indent_unit: impl Into<Cow<'static, str>>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    #[must_use]
    pub fn with_newlines(mut self, newlines: bool) -> Self {
        self.newlines = newlines;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    /// Bytes written by one indentation at the current depth.
    #[inline]
    pub fn indent_width(&self) -> usize {
        self.indent_level.saturating_mul(self.indent_unit.len())
    }
}

/// The named configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// See [`EmitConfig::pseudo`].
    Pseudo,
    /// See [`EmitConfig::pretty`].
    #[default]
    Pretty,
    /// See [`EmitConfig::compact`].
    Compact,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Pseudo, Preset::Pretty, Preset::Compact];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Pseudo => "pseudo",
            Preset::Pretty => "pretty",
            Preset::Compact => "compact",
        }
    }

    pub fn config(self) -> EmitConfig {
        match self {
            Preset::Pseudo => EmitConfig::pseudo(),
            Preset::Pretty => EmitConfig::pretty(),
            Preset::Compact => EmitConfig::compact(),
        }
    }
}

impl From<Preset> for EmitConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError {
    pub input: String,
}

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown emit preset `{}` (expected one of: pseudo, pretty, compact)",
            self.input
        )
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePresetError {
                input: s.to_owned(),
            })
    }
}
