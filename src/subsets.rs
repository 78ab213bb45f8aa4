//! Subset enumeration and combination keys.
//!
//! Every non-empty subset of `n` base sets is visited in increasing order of
//! its bitmask, so for sets `A`, `B`, `C` the order is `A`, `B`, `A∩B`, `C`,
//! `A∩C`, `B∩C`, `A∩B∩C`. Enumeration is `O(2^n)`, which is why `MAX_SETS`
//! exists.
use fxhash::FxHashSet;

use crate::error::PieError;

/// The separator placed between set names in a combination key. Set names
/// must not contain it.
pub const DEFAULT_SEPARATOR: &str = "∩";

/// The largest number of base sets we'll enumerate subsets for: `2^24 - 1`
/// subsets is already about 16.7 million.
pub const MAX_SETS: usize = 24;

/// A non-empty subset of base-set indices, in the order they were given.
/// Subsets produced by `generate_subsets` are always in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset(Vec<usize>);

impl Subset {
    /// The subset whose members are the bits set in `mask`, lowest first.
    #[must_use]
    pub fn from_mask(mask: u64, n: usize) -> Self {
        Subset((0..n).filter(|i| mask & (1 << i) != 0).collect())
    }

    /// The member indices
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of base sets in the subset
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Only true for a `Subset` built by hand from an empty `Vec`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `+1` for odd-sized subsets and `-1` for even-sized ones: the sign of
    /// this subset's term in `|A₁ ∪ … ∪ Aₙ|`.
    #[must_use]
    pub fn sign(&self) -> i64 {
        if self.len() % 2 == 1 {
            1
        } else {
            -1
        }
    }
}

impl From<Vec<usize>> for Subset {
    fn from(indices: Vec<usize>) -> Self {
        Subset(indices)
    }
}

/// Returns all `2^n - 1` non-empty subsets of `0..n`, in increasing bitmask
/// order. `n == 0` gives an empty list.
pub fn generate_subsets(n: usize) -> Result<Vec<Subset>, PieError> {
    if n > MAX_SETS {
        return Err(PieError::TooManySets { requested: n, max: MAX_SETS });
    }
    let end: u64 = 1 << n;
    Ok((1..end).map(|mask| Subset::from_mask(mask, n)).collect())
}

/// Joins `names[i]` for each `i` in `subset`, in the subset's own order. A
/// singleton's key is the bare set name.
///
/// # Panics
/// If an index in `subset` is out of range for `names`.
#[must_use]
pub fn subset_key<S: AsRef<str>>(subset: &Subset, names: &[S], separator: &str) -> String {
    let mut key = String::new();
    for (position, &index) in subset.indices().iter().enumerate() {
        if position > 0 {
            key.push_str(separator);
        }
        key.push_str(names[index].as_ref());
    }
    key
}

/// Checks that `separator` is non-empty and that every name is non-empty,
/// free of `separator`, and unique. Together these make `subset_key`
/// injective.
pub fn validate_set_names<S: AsRef<str>>(names: &[S], separator: &str) -> Result<(), PieError> {
    if separator.is_empty() {
        return Err(PieError::EmptySeparator);
    }
    let mut seen = FxHashSet::default();
    for name in names {
        let name = name.as_ref();
        if name.is_empty() || name.contains(separator) {
            return Err(PieError::InvalidSetName {
                name: name.to_string(),
                separator: separator.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(PieError::DuplicateSetName(name.to_string()));
        }
    }
    Ok(())
}
