//! Aggregates the integration test modules into a single binary.
//!
//! The submodules live under `tests/suite` and are wired here so the test
//! runner builds one integration test binary while keeping tests grouped
//! by feature area.

mod suite;
