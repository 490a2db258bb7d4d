//! Integration tests for the reporting front end
//!
//! Tests are organized by topic:
//! - `report` - Sweep reports written as SVG or tables
//! - `terminal` - Headless rendering of the terminal chart
