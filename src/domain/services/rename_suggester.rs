//! Rename Suggester
//!
//! Advisory matcher over the removed and added symbols of a diff. It proposes
//! pairs that look like renames; nothing in the policy engine consumes them.
//! Accepted suggestions become `[[rename]]` entries in a change set.

use serde::Serialize;
use similar::TextDiff;

use crate::domain::entities::{ChangeKind, ChangeRecord};
use crate::domain::value_objects::{SymbolKind, SymbolPath};

/// Minimum similarity ratio used when none is given
pub const DEFAULT_THRESHOLD: f32 = 0.8;

/// A proposed rename pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSuggestion {
    pub from: SymbolPath,
    pub to: SymbolPath,
    pub kind: SymbolKind,
    pub similarity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct RenameSuggester {
    threshold: f32,
}

impl Default for RenameSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RenameSuggester {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Character-level similarity of two paths in `[0, 1]`
    pub fn similarity(a: &SymbolPath, b: &SymbolPath) -> f32 {
        TextDiff::from_chars(a.as_str(), b.as_str()).ratio()
    }

    /// Propose renames among plain removals and additions.
    ///
    /// Pairs are taken greedily from the most similar down, so each symbol
    /// appears in at most one suggestion. Output is ordered by source path.
    pub fn suggest(&self, changes: &[ChangeRecord]) -> Vec<RenameSuggestion> {
        let removed: Vec<_> = changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Removed && c.new.is_none())
            .filter_map(|c| c.old.as_ref())
            .collect();
        let added: Vec<_> = changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Added)
            .filter_map(|c| c.new.as_ref())
            .collect();

        let mut candidates = Vec::new();
        for old in &removed {
            for new in added.iter().filter(|n| n.kind == old.kind) {
                let similarity = Self::similarity(&old.path, &new.path);
                if similarity >= self.threshold {
                    candidates.push(RenameSuggestion {
                        from: old.path.clone(),
                        to: new.path.clone(),
                        kind: old.kind,
                        similarity,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| a.from.cmp(&b.from))
                .then_with(|| a.to.cmp(&b.to))
        });

        let mut chosen: Vec<RenameSuggestion> = Vec::new();
        for candidate in candidates {
            let taken = chosen
                .iter()
                .any(|c| c.from == candidate.from || c.to == candidate.to);
            if !taken {
                chosen.push(candidate);
            }
        }

        chosen.sort_by(|a, b| a.from.cmp(&b.from));
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ApiSymbol;

    fn symbol(path: &str, kind: SymbolKind) -> ApiSymbol {
        ApiSymbol::new(SymbolPath::new(path).unwrap(), kind)
    }

    #[test]
    fn similar_paths_of_same_kind_are_paired() {
        let changes = vec![
            ChangeRecord::removed(symbol("pants/goal::fail_fast", SymbolKind::Option)),
            ChangeRecord::added(symbol("pants/goal::fail_faster", SymbolKind::Option)),
        ];
        let suggestions = RenameSuggester::default().suggest(&changes);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].from.as_str(), "pants/goal::fail_fast");
        assert_eq!(suggestions[0].to.as_str(), "pants/goal::fail_faster");
        assert!(suggestions[0].similarity >= 0.8);
    }

    #[test]
    fn different_kinds_are_never_paired() {
        let changes = vec![
            ChangeRecord::removed(symbol("pants/goal::fail_fast", SymbolKind::Option)),
            ChangeRecord::added(symbol("pants/goal::fail_fast2", SymbolKind::Method)),
        ];
        assert!(RenameSuggester::default().suggest(&changes).is_empty());
    }

    #[test]
    fn dissimilar_paths_are_ignored() {
        let changes = vec![
            ChangeRecord::removed(symbol("pants/goal::fail_fast", SymbolKind::Option)),
            ChangeRecord::added(symbol("contrib/node::npm_path", SymbolKind::Option)),
        ];
        assert!(RenameSuggester::default().suggest(&changes).is_empty());
    }

    #[test]
    fn each_symbol_is_used_once() {
        let changes = vec![
            ChangeRecord::removed(symbol("pants/a::option_one", SymbolKind::Option)),
            ChangeRecord::removed(symbol("pants/a::option_two", SymbolKind::Option)),
            ChangeRecord::added(symbol("pants/a::option_one_", SymbolKind::Option)),
        ];
        let suggestions = RenameSuggester::new(0.5).suggest(&changes);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].from.as_str(), "pants/a::option_one");
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RenameSuggester::new(3.0).threshold(), 1.0);
        assert_eq!(RenameSuggester::new(-1.0).threshold(), 0.0);
    }
}
