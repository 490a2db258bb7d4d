//! Integration tests for the planning library
//!
//! Tests are organized by topic:
//! - `properties` - Behavioural properties of the sample size calculation
//! - `sweep` - Lift sweeps and their failure modes
//! - `mde` - Minimum detectable lift against the forward calculation
