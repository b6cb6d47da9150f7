//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod rule_id;
mod symbol_kind;
mod symbol_path;
mod verdict;
mod version;

pub use config_warning::ConfigWarning;
pub use rule_id::RuleId;
pub use symbol_kind::SymbolKind;
pub use symbol_path::{SymbolPath, MEMBER_SEPARATOR};
pub use verdict::{Verdict, VerdictKind, WindowStatus};
pub use version::ReleaseVersion;
