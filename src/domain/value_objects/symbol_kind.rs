//! Symbol kind value object - what sort of API unit a symbol is
//!
//! - `Module`: an importable module or package
//! - `Method`: a callable member of a module
//! - `Option`: a user-facing configuration option
//! - `Parameter`: a named parameter accepted by a method

use serde::{Deserialize, Serialize};

/// Kind of a public API symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Method,
    Option,
    Parameter,
}

impl SymbolKind {
    /// All kinds, in declaration order
    pub const ALL: [SymbolKind; 4] = [
        SymbolKind::Module,
        SymbolKind::Method,
        SymbolKind::Option,
        SymbolKind::Parameter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Method => "method",
            SymbolKind::Option => "option",
            SymbolKind::Parameter => "parameter",
        }
    }

    /// Returns true if symbols of this kind accept a parameter list
    pub fn takes_params(&self) -> bool {
        matches!(self, SymbolKind::Method)
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&SymbolKind::Parameter).unwrap();
        assert_eq!(json, "\"parameter\"");
        let kind: SymbolKind = serde_json::from_str("\"option\"").unwrap();
        assert_eq!(kind, SymbolKind::Option);
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in SymbolKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn only_methods_take_params() {
        assert!(SymbolKind::Method.takes_params());
        assert!(!SymbolKind::Option.takes_params());
    }
}
