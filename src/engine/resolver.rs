use tracing::debug;

use crate::engine::similarity::similarity_at_least;
use crate::vocab::VocabularyIndex;

/// Minimum similarity for an approximate item match.
pub const ITEM_CUTOFF: f64 = 0.5;

/// Spot names are longer, so a looser cutoff lets unrelated spots through.
pub const SPOT_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Item,
    Spot,
}

impl VocabularyKind {
    pub fn cutoff(self) -> f64 {
        match self {
            VocabularyKind::Item => ITEM_CUTOFF,
            VocabularyKind::Spot => SPOT_CUTOFF,
        }
    }
}

/// Outcome of resolving one raw token.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Exact(&'a str),
    /// The only entry that starts with the token.
    Completed(&'a str),
    Approximate { name: &'a str, score: f64 },
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn canonical(&self) -> Option<&'a str> {
        match *self {
            Resolution::Exact(name) | Resolution::Completed(name) => Some(name),
            Resolution::Approximate { name, .. } => Some(name),
            Resolution::NotFound => None,
        }
    }

    /// `None` when nothing was found, since there is no name to compare.
    pub fn was_corrected(&self) -> Option<bool> {
        match self {
            Resolution::Exact(_) => Some(false),
            Resolution::Completed(_) | Resolution::Approximate { .. } => Some(true),
            Resolution::NotFound => None,
        }
    }
}

/// Maps raw user text onto one entry of a fixed vocabulary.
///
/// Tiers run in order and each only runs when the previous one gave no answer:
/// 1. exact (after trimming)
/// 2. unique prefix completion; several candidates are never guessed between
/// 3. best similarity score at or above `cutoff`
pub struct NameResolver<'a> {
    entries: &'a [String],
    cutoff: f64,
}

impl<'a> NameResolver<'a> {
    pub fn new(entries: &'a [String], cutoff: f64) -> Self {
        NameResolver { entries, cutoff }
    }

    pub fn for_vocabulary(index: &'a VocabularyIndex, kind: VocabularyKind) -> Self {
        let entries = match kind {
            VocabularyKind::Item => index.all_items(),
            VocabularyKind::Spot => index.all_spots(),
        };
        NameResolver::new(entries, kind.cutoff())
    }

    pub fn resolve(&self, raw: &str) -> Resolution<'a> {
        let name = raw.trim();
        if name.is_empty() {
            return Resolution::NotFound;
        }

        if let Some(entry) = self.entries.iter().find(|e| e.as_str() == name) {
            return Resolution::Exact(entry.as_str());
        }

        let mut prefix_matches = self.entries.iter().filter(|e| e.starts_with(name));
        match (prefix_matches.next(), prefix_matches.next()) {
            (Some(only), None) => {
                debug!(input = name, resolved = %only, "unique prefix completion");
                return Resolution::Completed(only.as_str());
            }
            (Some(_), Some(_)) => {
                debug!(input = name, "ambiguous prefix, trying similarity");
            }
            _ => {}
        }

        match self.best_similar(name) {
            Some((entry, score)) => {
                debug!(input = name, resolved = entry, score, "approximate match");
                Resolution::Approximate { name: entry, score }
            }
            None => {
                debug!(input = name, cutoff = self.cutoff, "no match");
                Resolution::NotFound
            }
        }
    }

    // Equal scores go to the greater name so the choice never depends on
    // vocabulary order.
    fn best_similar(&self, name: &str) -> Option<(&'a str, f64)> {
        let mut best: Option<(&'a str, f64)> = None;

        for entry in self.entries {
            let Some(score) = similarity_at_least(entry, name, self.cutoff) else {
                continue;
            };

            let better = match best {
                None => true,
                Some((best_entry, best_score)) => {
                    score > best_score || (score == best_score && entry.as_str() > best_entry)
                }
            };
            if better {
                best = Some((entry.as_str(), score));
            }
        }

        best
    }
}
