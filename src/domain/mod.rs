//! Domain Layer
//!
//! The core of apiwarden: snapshot diffing and policy evaluation without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Snapshots, symbols, change records and change sets
//! - `value_objects/` - Immutable value types (SymbolPath, ReleaseVersion, RuleId)
//! - `services/` - Differ, PolicyEngine, DeprecationWindowTracker, RenameSuggester
//! - `policies/` - Rule catalog and exclusion scope
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
