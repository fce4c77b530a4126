use std::collections::HashSet;
use std::fmt;

use super::model::Spot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Collects every problem in a parsed definition instead of stopping at the
/// first one, so a broken data file can be fixed in a single pass.
pub fn validate_spots(spots: &[Spot]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if spots.is_empty() {
        errors.push(ValidationError::new("vocabulary defines no spots"));
    }

    let mut seen_spots: HashSet<&str> = HashSet::new();

    for (idx, spot) in spots.iter().enumerate() {
        if spot.name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "spot #{} has a blank name",
                idx + 1
            )));
        } else if !seen_spots.insert(spot.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate spot name '{}'",
                spot.name
            )));
        }

        if spot.items.is_empty() {
            errors.push(ValidationError::new(format!(
                "spot '{}' has no items",
                spot.name
            )));
        }

        for (item_idx, item) in spot.items.iter().enumerate() {
            if item.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "spot '{}' item #{} is blank",
                    spot.name,
                    item_idx + 1
                )));
            }
        }
    }

    errors
}
