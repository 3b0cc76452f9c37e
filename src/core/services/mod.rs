//! Business logic services
//!
//! Pure functions that operate on domain models. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`filter`] - Filter the alumni view by search/status/year
//! - [`sort`] - Stable column sorting of derived views
//! - [`metrics`] - Dashboard aggregation over the full registry
//! - [`validate`] - Draft validation for add operations

pub mod filter;
pub mod metrics;
pub mod sort;
pub mod validate;

pub use filter::filter_alumni;
pub use metrics::{compute_dashboard_metrics, recent_activity, DashboardMetrics};
pub use sort::sort_alumni;
pub use validate::{
    validate_alumni, validate_project, AlumniDraft, FieldError, ProjectDraft, Validated,
};
