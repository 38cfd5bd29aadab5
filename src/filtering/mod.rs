// src/filtering/mod.rs

//! Typed filter criteria and the predicate that evaluates them.
//!
//! [`matches_filter`] is the reusable core: it decides whether a single field
//! value satisfies a single criterion. [`ActiveFilters`] combines criteria
//! across fields with AND semantics.

pub mod coerce;
mod active;
mod criterion;
mod predicate;

pub use active::{ActiveFilters, FilterEvents};
pub use criterion::{DateBounds, FilterCriterion, NumberBounds};
pub use predicate::matches_filter;
