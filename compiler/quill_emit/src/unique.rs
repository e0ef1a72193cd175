//! Unique name allocation.
//!
//! Assigns every distinct [`Var`] a dense integer on first reference and
//! encodes integers as short identifiers (`_0`, `_1`, ..., `_z`, `_A`, ...,
//! `_10`, ...). The store lives for exactly one emission run.

use rustc_hash::FxHashMap;

use crate::var::Var;

/// Symbols used by [`label`], in digit order.
pub const LABEL_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Prefix shared by every generated label.
pub const LABEL_PREFIX: char = '_';

/// Memoized variable-to-integer store.
///
/// Integers are handed out in first-seen order starting at 0. A variable is
/// written into the store exactly once; every later [`allocate`] for it is a
/// pure lookup.
///
/// A store must not be shared between logically independent runs: output
/// from two runs that reuse one store can collide silently, and nothing here
/// detects it.
///
/// [`allocate`]: UniqueNames::allocate
#[derive(Clone, Debug, Default)]
pub struct UniqueNames {
    ids: FxHashMap<Var, u32>,
    /// Variables in allocation order; `order[n]` was assigned `n`.
    order: Vec<Var>,
}

impl UniqueNames {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the integer for `var`, assigning the next one on first use.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct variables are allocated.
    pub fn allocate(&mut self, var: &Var) -> u32 {
        if let Some(&id) = self.ids.get(var) {
            return id;
        }

        let id = u32::try_from(self.order.len()).unwrap_or_else(|_| {
            panic!(
                "unique name store exceeded capacity: {} variables, max is {}",
                self.order.len(),
                u32::MAX
            )
        });
        tracing::trace!(?var, id, "allocated unique name");
        self.ids.insert(var.clone(), id);
        self.order.push(var.clone());
        id
    }

    /// Look up `var` without allocating.
    #[inline]
    pub fn get(&self, var: &Var) -> Option<u32> {
        self.ids.get(var).copied()
    }

    /// Number of variables allocated so far (also the next integer).
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(var, id)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, u32)> {
        self.order.iter().zip(0u32..)
    }
}

/// Encode `n` as an identifier label.
///
/// `0` encodes as `"_0"`; larger values are written in base 62 over
/// [`LABEL_ALPHABET`], most significant symbol first, after a leading `_`.
/// The encoding is injective and the result is always a valid identifier.
pub fn label(n: u32) -> String {
    let mut out = String::with_capacity(7);
    label_into(n, &mut out);
    out
}

/// Append the label for `n` to `out`.
pub fn label_into(n: u32, out: &mut String) {
    out.push(LABEL_PREFIX);
    if n == 0 {
        out.push('0');
        return;
    }

    // u32::MAX needs 6 base-62 digits.
    let mut digits = [0u8; 6];
    let mut len = 0;
    let mut rest = n;
    while rest > 0 {
        digits[len] = LABEL_ALPHABET[(rest % 62) as usize];
        rest /= 62;
        len += 1;
    }
    for &digit in digits[..len].iter().rev() {
        out.push(char::from(digit));
    }
}
