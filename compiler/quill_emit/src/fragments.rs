//! Output Fragments
//!
//! Abstraction for output accumulation during emission.
//!
//! [`Fragments`] is the run-wide collector: an append-only list of text pieces
//! that merges with independently built sub-collections by moving handles, and
//! flattens into a single `String` with one allocation at the end of a run.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Trait for emitting output text.
///
/// The emission context writes through an emitter. Implementations decide how
/// text is stored; they must preserve call order exactly.
pub trait Emitter {
    /// Emit a borrowed text fragment.
    fn emit(&mut self, text: &str);

    /// Emit an owned text fragment.
    fn emit_owned(&mut self, text: String) {
        self.emit(&text);
    }

    /// Emit a static text fragment.
    fn emit_static(&mut self, text: &'static str) {
        self.emit(text);
    }

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) {
        self.emit_static("\n");
    }
}

/// Ordered, mergeable collection of output fragments.
///
/// Static fragments (keywords, punctuation, indentation units) are stored
/// without copying. The total byte length is tracked as fragments arrive so
/// [`Fragments::flatten`] allocates exactly once.
#[derive(Clone, Default)]
pub struct Fragments {
    pieces: Vec<Cow<'static, str>>,
    len: usize,
}

impl Fragments {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` fragments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    fn push(&mut self, piece: Cow<'static, str>) {
        if piece.is_empty() {
            return;
        }
        self.len += piece.len();
        self.pieces.push(piece);
    }

    /// Move every fragment of `other` to the end of this collection.
    ///
    /// Only fragment handles move; no text is copied or rescanned.
    pub fn append(&mut self, mut other: Fragments) {
        self.len += other.len;
        if self.pieces.is_empty() {
            self.pieces = std::mem::take(&mut other.pieces);
        } else {
            self.pieces.append(&mut other.pieces);
        }
    }

    /// Total length of the output in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no text has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored fragments.
    pub fn fragment_count(&self) -> usize {
        self.pieces.len()
    }

    /// Iterate over the fragments in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().map(|piece| &**piece)
    }

    /// Concatenate all fragments into the final output.
    pub fn flatten(self) -> String {
        let mut out = String::with_capacity(self.len);
        for piece in &self.pieces {
            out.push_str(piece);
        }
        out
    }

    /// Stream the fragments to `writer` in order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for piece in &self.pieces {
            writer.write_all(piece.as_bytes())?;
        }
        writer.flush()
    }
}

impl Emitter for Fragments {
    fn emit(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(Cow::Owned(text.to_owned()));
        }
    }

    fn emit_owned(&mut self, text: String) {
        self.push(Cow::Owned(text));
    }

    fn emit_static(&mut self, text: &'static str) {
        self.push(Cow::Borrowed(text));
    }
}

/// Collections are equal when they hold the same text, however it is split.
impl PartialEq for Fragments {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .flat_map(str::bytes)
                .eq(other.iter().flat_map(str::bytes))
    }
}

impl Eq for Fragments {}

impl Extend<Fragments> for Fragments {
    fn extend<I: IntoIterator<Item = Fragments>>(&mut self, iter: I) {
        for other in iter {
            self.append(other);
        }
    }
}

impl fmt::Display for Fragments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            f.write_str(piece)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fragments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragments")
            .field("fragments", &self.pieces.len())
            .field("len", &self.len)
            .finish()
    }
}
