//! The `inclusion_exclusion` function is the kernel of the application: it
//! computes the size of a union of finite sets from the sizes of the sets and
//! their intersections, using the Principle of Inclusion-Exclusion,
//!
//! `|A₁ ∪ … ∪ Aₙ| = Σ|Aᵢ| − Σ|Aᵢ ∩ Aⱼ| + Σ|Aᵢ ∩ Aⱼ ∩ Aₖ| − …`
//!
//! The `subsets` module enumerates the terms, `cardinality` holds (or
//! derives) the sizes, and `operations` provides plain set operations. The
//! `session` module is the interactive front end; `input` and `report` hide
//! its I/O so it can be driven by a script.
//!
//! Current Limitations:
//! * The number of terms is `2^n - 1` for `n` sets, so `n` is capped at
//!   `subsets::MAX_SETS`.
//! * Set names must not contain the key separator (`∩` by default).

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
pub mod cardinality;
pub mod error;
pub mod input;
pub mod operations;
pub mod report;
pub mod session;
pub mod style;
pub mod subsets;

pub use calculate::{inclusion_exclusion, inclusion_exclusion_with, Evaluation, StepRecord};
pub use cardinality::{approximate_intersection, derive_cardinalities, CardinalityMap, IntSet};
pub use error::PieError;
pub use subsets::{generate_subsets, subset_key, Subset, DEFAULT_SEPARATOR};
