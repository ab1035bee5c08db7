// ABOUTME: Risk equation module with coefficient tables keyed by demographic subgroup
// ABOUTME: Currently provides the Pooled Cohort Equation for 10-year ASCVD risk

//! Algorithm module
//!
//! Each equation owns a coefficient bundle per demographic subgroup. Adding a
//! subgroup means adding a table entry, not a new code path.

pub mod pooled_cohort;

pub use pooled_cohort::{
    CoefficientTable, PooledCohortCoefficients, Subgroup, SMOKER_INTERACTION_AGE_CAP, WHITE_MALE,
};
