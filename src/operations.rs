//! Plain set operations over a collection of integer sets.
//!
//! Nothing is cached: each function works from the sets it's handed, and the
//! universal set for `complement` is recomputed as the union every time.
//! Results keep first-insertion order, so the output follows the order in
//! which elements were entered.
use crate::cardinality::IntSet;
use crate::error::PieError;

/// Every element found in any of `sets`
#[must_use]
pub fn union(sets: &[IntSet]) -> IntSet {
    let mut result = IntSet::default();
    for set in sets {
        result.extend(set.iter().copied());
    }
    result
}

/// Every element found in all of `sets`, or the empty set if there are none.
#[must_use]
pub fn intersection(sets: &[IntSet]) -> IntSet {
    let [first, rest @ ..] = sets else { return IntSet::default() };
    // `retain` keeps the survivors in order
    let mut result = first.clone();
    for other in rest {
        result.retain(|x| other.contains(x));
    }
    result
}

/// The elements of `sets[a]` that aren't in `sets[b]`
pub fn difference(sets: &[IntSet], a: usize, b: usize) -> Result<IntSet, PieError> {
    let keep = nth(sets, a)?;
    let drop = nth(sets, b)?;
    let mut result = keep.clone();
    result.retain(|x| !drop.contains(x));
    Ok(result)
}

/// The elements of the union of all `sets` that aren't in `sets[a]`
pub fn complement(sets: &[IntSet], a: usize) -> Result<IntSet, PieError> {
    let excluded = nth(sets, a)?;
    let mut result = union(sets);
    result.retain(|x| !excluded.contains(x));
    Ok(result)
}

fn nth(sets: &[IntSet], index: usize) -> Result<&IntSet, PieError> {
    sets.get(index).ok_or(PieError::SetIndexOutOfRange { index, count: sets.len() })
}

/// `{1, 2, 3}`, in the set's own order
#[must_use]
pub fn format_set(set: &IntSet) -> String {
    let elements: Vec<String> = set.iter().map(ToString::to_string).collect();
    format!("{{{}}}", elements.join(", "))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn sets(all: &[&[i64]]) -> Vec<IntSet> {
        all.iter().map(|s| s.iter().copied().collect()).collect()
    }

    #[test]
    fn results_for_each_operation() {
        let args = sets(&[
            &[1, 2, 3, 5],
            &[2, 3, 4, 5],
            &[5, 3, 6],
        ]);
        assert_eq!(format_set(&union(&args)), "{1, 2, 3, 5, 4, 6}");
        assert_eq!(format_set(&intersection(&args)), "{3, 5}");
        assert_eq!(format_set(&difference(&args, 0, 1).unwrap()), "{1}");
        assert_eq!(format_set(&difference(&args, 2, 0).unwrap()), "{6}");
        assert_eq!(format_set(&complement(&args, 1).unwrap()), "{1, 6}");
    }

    #[test]
    fn given_a_single_set_union_and_intersection_return_it() {
        let args = sets(&[&[7, 1, 4]]);
        assert_eq!(format_set(&union(&args)), "{7, 1, 4}");
        assert_eq!(format_set(&intersection(&args)), "{7, 1, 4}");
        assert_eq!(format_set(&complement(&args, 0).unwrap()), "{}");
    }

    #[test]
    fn no_sets_give_empty_results() {
        assert!(union(&[]).is_empty());
        assert!(intersection(&[]).is_empty());
    }

    #[test]
    fn difference_of_a_set_with_itself_is_empty() {
        let args = sets(&[&[1, 2], &[3]]);
        assert!(difference(&args, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let args = sets(&[&[1], &[2]]);
        assert!(matches!(
            difference(&args, 0, 2),
            Err(PieError::SetIndexOutOfRange { index: 2, count: 2 })
        ));
        assert!(matches!(
            complement(&args, 5),
            Err(PieError::SetIndexOutOfRange { index: 5, count: 2 })
        ));
    }
}
