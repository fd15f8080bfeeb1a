//! Finite integer domains.
//!
//! Every variable ranges over a subset of `0..=upper`. Domains are bitsets
//! that only shrink once search starts.

use std::fmt;

use smallvec::SmallVec;

const WORD_BITS: usize = 64;

/// A finite set of non-negative values.
///
/// # Example
///
/// ```
/// use shiftforge_solver::store::Domain;
///
/// let mut domain = Domain::range(5);
/// assert_eq!(domain.size(), 6);
///
/// domain.remove(0);
/// domain.retain_below(3);
/// assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(domain.min(), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct Domain {
    words: SmallVec<[u64; 2]>,
    size: usize,
}

impl Domain {
    /// Creates the empty domain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the domain `0..=upper`.
    pub fn range(upper: usize) -> Self {
        Self::interval(0, upper)
    }

    /// Creates the domain `lower..=upper` (empty if `lower > upper`).
    pub fn interval(lower: usize, upper: usize) -> Self {
        Self::from_values(lower..=upper)
    }

    /// Creates the domain holding exactly `value`.
    pub fn singleton(value: usize) -> Self {
        Self::from_values(std::iter::once(value))
    }

    /// The 0/1 domain of an indicator.
    pub fn boolean() -> Self {
        Self::range(1)
    }

    /// Creates a domain from arbitrary values; duplicates collapse.
    pub fn from_values(values: impl IntoIterator<Item = usize>) -> Self {
        let mut domain = Self::empty();
        for value in values {
            domain.insert(value);
        }
        domain
    }

    fn insert(&mut self, value: usize) {
        let (word, bit) = (value / WORD_BITS, value % WORD_BITS);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        if self.words[word] & (1u64 << bit) == 0 {
            self.words[word] |= 1u64 << bit;
            self.size += 1;
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if exactly one value remains.
    pub fn is_fixed(&self) -> bool {
        self.size == 1
    }

    /// Returns the value of a fixed domain.
    pub fn value(&self) -> Option<usize> {
        if self.is_fixed() {
            self.min()
        } else {
            None
        }
    }

    pub fn contains(&self, value: usize) -> bool {
        let (word, bit) = (value / WORD_BITS, value % WORD_BITS);
        self.words
            .get(word)
            .is_some_and(|w| w & (1u64 << bit) != 0)
    }

    pub fn min(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i * WORD_BITS + w.trailing_zeros() as usize)
    }

    pub fn max(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros() as usize))
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + bit)
            })
        })
    }

    /// Removes `value`. Returns true if the domain changed.
    pub fn remove(&mut self, value: usize) -> bool {
        let (word, bit) = (value / WORD_BITS, value % WORD_BITS);
        match self.words.get_mut(word) {
            Some(w) if *w & (1u64 << bit) != 0 => {
                *w &= !(1u64 << bit);
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    /// Keeps only `value`; empties the domain if it isn't present.
    pub fn fix(&mut self, value: usize) -> bool {
        if self.value() == Some(value) {
            return false;
        }
        let present = self.contains(value);
        self.words.iter_mut().for_each(|w| *w = 0);
        self.size = 0;
        if present {
            self.insert(value);
        }
        true
    }

    /// Keeps only the values accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) -> bool {
        let doomed: SmallVec<[usize; 16]> = self.iter().filter(|&v| !keep(v)).collect();
        for value in &doomed {
            self.remove(*value);
        }
        !doomed.is_empty()
    }

    /// Keeps only values strictly below `bound`.
    pub fn retain_below(&mut self, bound: usize) -> bool {
        self.retain(|v| v < bound)
    }

    /// Keeps only values at or above `bound`.
    pub fn retain_from(&mut self, bound: usize) -> bool {
        self.retain(|v| v >= bound)
    }

    /// Intersects with `other`.
    pub fn intersect(&mut self, other: &Domain) -> bool {
        self.retain(|v| other.contains(v))
    }

    /// Adds every value of `other`.
    pub fn union_with(&mut self, other: &Domain) {
        for value in other.iter() {
            self.insert(value);
        }
    }
}

/// Set equality; trailing empty words don't matter.
impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for Domain {}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
