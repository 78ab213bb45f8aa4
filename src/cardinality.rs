//! Provides `CardinalityMap`, the name → count mapping the evaluator reads,
//! and the two ways of filling it in without asking for every intersection:
//! deriving counts from real sets, and approximating them.
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

use crate::error::PieError;
use crate::subsets::{generate_subsets, subset_key, validate_set_names, Subset};

/// A finite set of integers that remembers insertion order, so output is
/// printed in the order elements were entered.
pub type IntSet = IndexSet<i64, FxBuildHasher>;

/// An insertion-ordered mapping from combination key (a bare set name, or
/// names joined by the separator) to a cardinality.
///
/// Nothing here checks that intersections are no larger than their
/// ingredients; inconsistent data is allowed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardinalityMap {
    counts: IndexMap<String, u64, FxBuildHasher>,
}

impl CardinalityMap {
    /// An empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for `key`, returning the previous count if there was one.
    /// A new key goes at the end; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, count: u64) -> Option<u64> {
        self.counts.insert(key.into(), count)
    }

    /// The count for `key`, if one was supplied
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Whether `key` has a count
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no key has a count
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(key, count)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The keys that name base sets rather than intersections, that is, those
    /// not containing `separator`, in insertion order.
    #[must_use]
    pub fn base_names(&self, separator: &str) -> Vec<String> {
        self.counts.keys().filter(|k| !k.contains(separator)).cloned().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CardinalityMap {
    fn from_iter<T: IntoIterator<Item = (K, u64)>>(iter: T) -> Self {
        let mut map = CardinalityMap::new();
        for (key, count) in iter {
            map.insert(key, count);
        }
        map
    }
}

/// Builds the full cardinality mapping for real sets: the singleton counts
/// first, in the order the sets are given, then every intersection of two or
/// more sets in subset-enumeration order.
///
/// Each intersection starts from its first member and retains only elements
/// found in each later member, so the result is always consistent: no
/// intersection outgrows any of its ingredients.
pub fn derive_cardinalities<S: AsRef<str>>(
    sets: &[(S, IntSet)],
    separator: &str,
) -> Result<CardinalityMap, PieError> {
    let names: Vec<&str> = sets.iter().map(|(name, _)| name.as_ref()).collect();
    validate_set_names(&names, separator)?;

    let mut data = CardinalityMap::new();
    for (name, elements) in sets {
        data.insert(name.as_ref(), elements.len() as u64);
    }
    for subset in generate_subsets(sets.len())? {
        let [first, rest @ ..] = subset.indices() else { continue };
        if rest.is_empty() {
            continue;
        }
        let mut common = sets[*first].1.clone();
        for &index in rest {
            let other = &sets[index].1;
            common.retain(|x| other.contains(x));
        }
        let key = subset_key(&subset, &names, separator);
        log::debug!("derived |{key}| = {}", common.len());
        data.insert(key, common.len() as u64);
    }
    Ok(data)
}

/// A heuristic stand-in for an intersection nobody measured: half the
/// smallest member's count, rounded down.
///
/// This is not an estimator of anything; totals built from it can be
/// inconsistent, even negative. Members with no count in `data` are ignored,
/// and if none has a count the result is 0.
#[must_use]
pub fn approximate_intersection<S: AsRef<str>>(
    subset: &Subset,
    names: &[S],
    data: &CardinalityMap,
) -> u64 {
    let smallest = subset
        .indices()
        .iter()
        .filter_map(|&i| names.get(i))
        .filter_map(|name| data.get(name.as_ref()))
        .min()
        .unwrap_or(0);
    smallest / 2
}
