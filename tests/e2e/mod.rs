//! End-to-end tests
//!
//! Full user journeys through the public API, one server per test.
