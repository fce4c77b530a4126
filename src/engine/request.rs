use tracing::debug;

use crate::engine::query::{items_of_spot, spots_matching};
use crate::engine::resolver::{NameResolver, VocabularyKind};
use crate::vocab::VocabularyIndex;

/// A raw token that was understood as a different canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQueryOutcome {
    /// Nothing but commas and whitespace; the caller should show usage.
    EmptyQuery,
    /// Raw tokens that matched nothing, in input order.
    Unresolved(Vec<String>),
    /// `spots` may be empty: every name was understood but no spot fits.
    Found {
        items: Vec<String>,
        spots: Vec<String>,
        corrections: Vec<Correction>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotQueryOutcome {
    NotFound(String),
    Found {
        spot: String,
        items: Vec<String>,
        correction: Option<Correction>,
    },
}

/// Split a comma separated item query into trimmed, non-empty tokens.
pub fn split_item_query(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Resolve every token of `raw` and look up the spots holding all of them.
///
/// One unknown token fails the whole query; the result then lists only the
/// tokens that could not be resolved.
pub fn resolve_item_query(index: &VocabularyIndex, raw: &str) -> ItemQueryOutcome {
    let tokens = split_item_query(raw);
    if tokens.is_empty() {
        return ItemQueryOutcome::EmptyQuery;
    }

    let resolver = NameResolver::for_vocabulary(index, VocabularyKind::Item);

    let mut resolved: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut corrections: Vec<Correction> = Vec::new();

    for token in tokens {
        let res = resolver.resolve(token);
        let Some(canonical) = res.canonical() else {
            unresolved.push(token.to_string());
            continue;
        };

        if res.was_corrected() == Some(true) {
            if let Some(existing) = corrections.iter_mut().find(|c| c.from == token) {
                existing.to = canonical.to_string();
            } else {
                corrections.push(Correction {
                    from: token.to_string(),
                    to: canonical.to_string(),
                });
            }
        }

        if !resolved.contains(&canonical) {
            resolved.push(canonical);
        }
    }

    if !unresolved.is_empty() {
        debug!(?unresolved, "item query has unknown names");
        return ItemQueryOutcome::Unresolved(unresolved);
    }

    let spots = spots_matching(index, resolved.as_slice())
        .into_iter()
        .map(str::to_string)
        .collect();

    ItemQueryOutcome::Found {
        items: resolved.into_iter().map(str::to_string).collect(),
        spots,
        corrections,
    }
}

/// Resolve `raw` as a single spot name and list what can be gathered there.
pub fn resolve_spot_query(index: &VocabularyIndex, raw: &str) -> SpotQueryOutcome {
    let token = raw.trim();
    let resolver = NameResolver::for_vocabulary(index, VocabularyKind::Spot);
    let res = resolver.resolve(token);

    let Some(spot) = res.canonical() else {
        return SpotQueryOutcome::NotFound(token.to_string());
    };

    let items = items_of_spot(index, spot)
        .map(|items| items.to_vec())
        .unwrap_or_default();

    let correction = (res.was_corrected() == Some(true)).then(|| Correction {
        from: token.to_string(),
        to: spot.to_string(),
    });

    SpotQueryOutcome::Found {
        spot: spot.to_string(),
        items,
        correction,
    }
}
