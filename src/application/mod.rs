//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Load, diff, evaluate and report one snapshot pair

pub mod check;
pub mod report;

pub use check::{CheckInputs, CheckRequest, CheckUseCase};
pub use report::{
    PolicyReport, ReportEntry, ReportError, ReportSummary, SnapshotInfo, EXIT_CONFIG_ERROR,
    EXIT_OK, EXIT_VIOLATION,
};
