//! Various collections of unit tests
//!
//! The bulk of the "we're confident this works" comes from fuzzing and property tests against the
//! [`Mock`](crate::mock::Mock), but each failure found that way is kept as a new unit test, so
//! there's a few of them here as well.

/// Regression tests, written as the fuzzing harness prints them
///
/// Generated from the `ops_small_capacity` fuzz target.
mod basic;
/// Manually-written test cases
mod manual;
