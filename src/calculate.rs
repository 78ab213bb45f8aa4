//! Houses the `inclusion_exclusion` function, the kernel of the application.
//!
use std::collections::BTreeMap;
use std::fmt;

use crate::cardinality::CardinalityMap;
use crate::error::PieError;
use crate::subsets::{generate_subsets, subset_key, validate_set_names};

/// One term of the alternating sum, as it was added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The combination this term comes from
    pub key: String,
    /// How many base sets the combination intersects
    pub order: usize,
    /// The cardinality, negated for even `order`
    pub contribution: i64,
    /// The total after adding `contribution`
    pub running_total: i64,
}

impl fmt::Display for StepRecord {
    /// `Add A = +5 -> 5` or `Subtract A∩B = -2 -> 3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, sign) = if self.order % 2 == 1 { ("Add", '+') } else { ("Subtract", '-') };
        let magnitude = self.contribution.unsigned_abs();
        write!(f, "{verb} {} = {sign}{magnitude} -> {}", self.key, self.running_total)
    }
}

/// The sum of the contributions of all combinations of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotal {
    /// Subset size: 1 for the base sets, 2 for pairwise intersections, ...
    pub order: usize,
    /// Signed sum of this order's contributions. Wider than the total,
    /// since one order's sum can exceed `i64` even when the total doesn't.
    pub sum: i128,
}

/// What `inclusion_exclusion` found: the union's size and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The alternating sum. Negative only if the input was inconsistent.
    pub total: i64,
    /// One record per combination present in the data, in enumeration order
    pub trace: Vec<StepRecord>,
}

impl Evaluation {
    /// A negative union size can't come from real sets, so the cardinalities
    /// supplied must have contradicted each other.
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        self.total < 0
    }

    /// Contributions grouped by order, smallest order first. Orders with no
    /// data are left out.
    #[must_use]
    pub fn order_totals(&self) -> Vec<OrderTotal> {
        let mut sums = BTreeMap::<usize, i128>::new();
        for step in &self.trace {
            *sums.entry(step.order).or_default() += i128::from(step.contribution);
        }
        sums.into_iter().map(|(order, sum)| OrderTotal { order, sum }).collect()
    }
}

/// Computes `|A₁ ∪ … ∪ Aₙ|` for the sets named in `names` from the
/// cardinalities in `data`.
///
/// Every non-empty subset of `names` is visited once, in enumeration order.
/// A subset whose key is missing from `data` contributes nothing and leaves
/// no trace. A present key adds its count for odd-sized subsets and
/// subtracts it for even-sized ones.
///
/// A negative total is returned as is; see `Evaluation::is_inconsistent`.
pub fn inclusion_exclusion<S: AsRef<str>>(
    data: &CardinalityMap,
    names: &[S],
    separator: &str,
) -> Result<Evaluation, PieError> {
    inclusion_exclusion_with(data, names, separator, |_| Ok(()))
}

/// Like `inclusion_exclusion`, but calls `on_step` with each `StepRecord` as
/// soon as it's computed. An error from `on_step` stops the evaluation.
pub fn inclusion_exclusion_with<S, F>(
    data: &CardinalityMap,
    names: &[S],
    separator: &str,
    mut on_step: F,
) -> Result<Evaluation, PieError>
where
    S: AsRef<str>,
    F: FnMut(&StepRecord) -> std::io::Result<()>,
{
    validate_set_names(names, separator)?;
    log::info!("evaluating the union of {} sets", names.len());

    let mut total = 0_i64;
    let mut trace = Vec::new();
    for subset in generate_subsets(names.len())? {
        let key = subset_key(&subset, names, separator);
        let Some(count) = data.get(&key) else {
            log::trace!("no cardinality for {key}, skipping");
            continue;
        };
        let Ok(magnitude) = i64::try_from(count) else { return Err(PieError::Overflow(key)) };
        let contribution = subset.sign() * magnitude;
        let Some(running_total) = total.checked_add(contribution) else {
            return Err(PieError::Overflow(key));
        };
        total = running_total;

        let step = StepRecord { key, order: subset.len(), contribution, running_total };
        log::debug!("{step}");
        on_step(&step)?;
        trace.push(step);
    }

    if total < 0 {
        log::warn!("union size {total} is negative: the cardinalities are inconsistent");
    }
    Ok(Evaluation { total, trace })
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::cardinality::{derive_cardinalities, IntSet};
    use crate::subsets::DEFAULT_SEPARATOR;
    use test_log::test;

    const LIBRARY: [&str; 3] = ["Maths", "Science", "Literature"];

    fn library_data() -> CardinalityMap {
        [
            ("Maths", 50),
            ("Science", 45),
            ("Literature", 30),
            ("Maths∩Science", 12),
            ("Maths∩Literature", 8),
            ("Science∩Literature", 6),
            ("Maths∩Science∩Literature", 4),
        ]
        .into_iter()
        .collect()
    }

    fn pie(data: &CardinalityMap, names: &[&str]) -> Evaluation {
        inclusion_exclusion(data, names, DEFAULT_SEPARATOR).unwrap()
    }

    #[test]
    fn library_example_totals_103() {
        let result = pie(&library_data(), &LIBRARY);
        assert_eq!(result.total, 103);
        assert!(!result.is_inconsistent());
    }

    #[test]
    fn trace_follows_enumeration_order_with_signed_values() {
        let result = pie(&library_data(), &LIBRARY);
        let steps: Vec<(&str, i64, i64)> = result
            .trace
            .iter()
            .map(|s| (s.key.as_str(), s.contribution, s.running_total))
            .collect();
        assert_eq!(
            steps,
            [
                ("Maths", 50, 50),
                ("Science", 45, 95),
                ("Maths∩Science", -12, 83),
                ("Literature", 30, 113),
                ("Maths∩Literature", -8, 105),
                ("Science∩Literature", -6, 99),
                ("Maths∩Science∩Literature", 4, 103),
            ]
        );
    }

    #[test]
    fn steps_display_as_add_or_subtract() {
        let result = pie(&library_data(), &LIBRARY);
        assert_eq!(result.trace[0].to_string(), "Add Maths = +50 -> 50");
        assert_eq!(result.trace[2].to_string(), "Subtract Maths∩Science = -12 -> 83");
    }

    #[test]
    fn a_zero_triple_counts_like_a_missing_one_but_still_shows_in_the_trace() {
        let names = ["Action", "Comedy", "Drama"];
        let mut data: CardinalityMap = [
            ("Action", 20),
            ("Comedy", 15),
            ("Drama", 10),
            ("Action∩Comedy", 5),
            ("Action∩Drama", 3),
            ("Comedy∩Drama", 2),
        ]
        .into_iter()
        .collect();
        let without = pie(&data, &names);
        data.insert("Action∩Comedy∩Drama", 0);
        let with_zero = pie(&data, &names);

        assert_eq!(without.total, 35);
        assert_eq!(with_zero.total, without.total);
        assert_eq!(without.trace.len(), 6);
        assert_eq!(with_zero.trace.len(), 7);
        assert_eq!(with_zero.trace[6].key, "Action∩Comedy∩Drama");
        assert_eq!(with_zero.trace[6].contribution, 0);
    }

    #[test]
    fn evaluating_twice_gives_the_same_answer() {
        let data = library_data();
        assert_eq!(pie(&data, &LIBRARY), pie(&data, &LIBRARY));
    }

    #[test]
    fn derived_cardinalities_agree_with_the_real_union() {
        let a: IntSet = [1, 2, 3].into_iter().collect();
        let b: IntSet = [2, 3, 4].into_iter().collect();
        let mut union = a.clone();
        union.extend(b.iter().copied());

        let sets = vec![("A", a), ("B", b)];
        let data = derive_cardinalities(&sets, DEFAULT_SEPARATOR).unwrap();
        assert_eq!(data.get("A∩B"), Some(2));
        assert_eq!(pie(&data, &["A", "B"]).total, union.len() as i64);
        assert_eq!(union.len(), 4);
    }

    #[test]
    fn inconsistent_data_gives_a_negative_total_not_an_error() {
        let data: CardinalityMap = [("A", 1), ("B", 1), ("A∩B", 5)].into_iter().collect();
        let result = pie(&data, &["A", "B"]);
        assert_eq!(result.total, -3);
        assert!(result.is_inconsistent());
    }

    #[test]
    fn order_totals_group_contributions_by_subset_size() {
        let result = pie(&library_data(), &LIBRARY);
        assert_eq!(
            result.order_totals(),
            [
                OrderTotal { order: 1, sum: 125 },
                OrderTotal { order: 2, sum: -26 },
                OrderTotal { order: 3, sum: 4 },
            ]
        );
    }

    #[test]
    fn order_totals_hold_sums_that_outgrow_i64() {
        let huge = 4_000_000_000_000_000_000_u64;
        let data: CardinalityMap =
            [("A", huge), ("B", huge), ("A∩B", huge), ("C", huge)].into_iter().collect();
        let result = pie(&data, &["A", "B", "C"]);
        assert_eq!(result.total, 8_000_000_000_000_000_000);
        assert_eq!(
            result.order_totals(),
            [
                OrderTotal { order: 1, sum: 12_000_000_000_000_000_000 },
                OrderTotal { order: 2, sum: -4_000_000_000_000_000_000 },
            ]
        );
    }

    #[test]
    fn sizes_beyond_i64_are_an_overflow() {
        let data: CardinalityMap = [("A", u64::MAX)].into_iter().collect();
        assert!(matches!(
            inclusion_exclusion(&data, &["A"], DEFAULT_SEPARATOR),
            Err(PieError::Overflow(key)) if key == "A"
        ));

        let big = i64::MAX as u64;
        let data: CardinalityMap = [("A", big), ("B", big)].into_iter().collect();
        assert!(matches!(
            inclusion_exclusion(&data, &["A", "B"], DEFAULT_SEPARATOR),
            Err(PieError::Overflow(key)) if key == "B"
        ));
    }

    #[test]
    fn on_step_sees_every_step_in_order() {
        let mut seen = Vec::new();
        let result = inclusion_exclusion_with(&library_data(), &LIBRARY, DEFAULT_SEPARATOR, |s| {
            seen.push(s.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, result.trace);
    }

    #[test]
    fn an_on_step_error_stops_the_evaluation() {
        let mut calls = 0;
        let result = inclusion_exclusion_with(&library_data(), &LIBRARY, DEFAULT_SEPARATOR, |_| {
            calls += 1;
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        });
        assert!(matches!(result, Err(PieError::Io(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn a_custom_separator_changes_the_keys_looked_up() {
        let data: CardinalityMap = [("A", 3), ("B", 4), ("A&B", 1)].into_iter().collect();
        assert_eq!(inclusion_exclusion(&data, &["A", "B"], "&").unwrap().total, 6);
        assert_eq!(pie(&data, &["A", "B"]).total, 7);
    }

    #[test]
    fn an_empty_separator_is_refused_before_any_step() {
        let data: CardinalityMap = [("a", 1), ("b", 1), ("ab", 7)].into_iter().collect();
        let mut steps = 0;
        let result = inclusion_exclusion_with(&data, &["a", "b", "ab"], "", |_| {
            steps += 1;
            Ok(())
        });
        assert!(matches!(result, Err(PieError::EmptySeparator)));
        assert_eq!(steps, 0);
    }

    #[test]
    fn no_sets_sum_to_zero() {
        let names: [&str; 0] = [];
        let result = pie(&CardinalityMap::new(), &names);
        assert_eq!(result.total, 0);
        assert!(result.trace.is_empty());
    }
}
