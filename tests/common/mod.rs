mod assertions;

// Re-export
pub use assertions::{assert_mass_eq, assert_report_finite};
pub use fixtures::*;
