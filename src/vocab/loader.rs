use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::model::{Spot, VocabularyIndex};
use super::validator::{ValidationError, validate_spots};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed vocabulary: {0}")]
    Malformed(String),

    #[error("unsupported vocabulary file '{}': expected a .json or .toml extension", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid vocabulary: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyFormat {
    /// `{ "spot": ["item", ...], ... }`
    Json,
    /// `[spots]` table of `"spot" = ["item", ...]`
    Toml,
}

impl VocabularyFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(VocabularyFormat::Json),
            "toml" => Some(VocabularyFormat::Toml),
            _ => None,
        }
    }
}

/////////////////////////////
/// PUBLIC LOAD FUNCTIONS ///
/////////////////////////////

/// Load a vocabulary from disk; the format is picked from the file extension.
pub fn load_vocabulary_from_file(path: &Path) -> Result<VocabularyIndex, LoadError> {
    let format = VocabularyFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path)?;
    let index = load_vocabulary_from_str(&contents, format)?;

    info!(
        path = %path.display(),
        spots = index.spot_count(),
        items = index.item_count(),
        "vocabulary loaded"
    );
    Ok(index)
}

pub fn load_vocabulary_from_str(
    contents: &str,
    format: VocabularyFormat,
) -> Result<VocabularyIndex, LoadError> {
    let spots = match format {
        VocabularyFormat::Json => parse_json_spots(contents)?,
        VocabularyFormat::Toml => parse_toml_spots(contents)?,
    };
    build_index(spots)
}

pub fn load_vocabulary_from_json_str(contents: &str) -> Result<VocabularyIndex, LoadError> {
    load_vocabulary_from_str(contents, VocabularyFormat::Json)
}

pub fn load_vocabulary_from_toml_str(contents: &str) -> Result<VocabularyIndex, LoadError> {
    load_vocabulary_from_str(contents, VocabularyFormat::Toml)
}

////////////////////////
/// FORMAT PARSERS   ///
////////////////////////

fn parse_json_spots(contents: &str) -> Result<Vec<Spot>, LoadError> {
    let root: serde_json::Value = serde_json::from_str(contents)?;
    spots_from_value(&root)
}

fn parse_toml_spots(contents: &str) -> Result<Vec<Spot>, LoadError> {
    let root: toml::Table = toml::from_str(contents)?;
    let table = root
        .get("spots")
        .and_then(toml::Value::as_table)
        .ok_or_else(|| LoadError::Malformed("missing [spots] table".to_string()))?;

    // Both maps preserve insertion order, so the spot order survives the hop.
    let root = serde_json::to_value(table)?;
    spots_from_value(&root)
}

fn spots_from_value(root: &serde_json::Value) -> Result<Vec<Spot>, LoadError> {
    let map = root.as_object().ok_or_else(|| {
        LoadError::Malformed("top level must be an object of spot -> item list".to_string())
    })?;

    let mut spots: Vec<Spot> = Vec::with_capacity(map.len());

    for (name, value) in map {
        let list = value.as_array().ok_or_else(|| {
            LoadError::Malformed(format!("spot '{}' must map to a list of item names", name))
        })?;

        let mut items: Vec<String> = Vec::with_capacity(list.len());
        for entry in list {
            let item = entry.as_str().ok_or_else(|| {
                LoadError::Malformed(format!("spot '{}' contains a non-string item", name))
            })?;
            items.push(item.trim().to_string());
        }

        // Canonical names never carry surrounding whitespace; user input is
        // trimmed before matching, so padded names could never match exactly.
        spots.push(Spot {
            name: name.trim().to_string(),
            items,
        });
    }

    Ok(spots)
}

fn build_index(spots: Vec<Spot>) -> Result<VocabularyIndex, LoadError> {
    let errors = validate_spots(&spots);
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    let spots = spots.into_iter().map(dedup_items).collect();
    Ok(VocabularyIndex::new(spots))
}

// Item lists are sets; repeated entries keep their first position.
fn dedup_items(mut spot: Spot) -> Spot {
    let before = spot.items.len();
    let mut seen: Vec<String> = Vec::with_capacity(before);
    spot.items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });

    if spot.items.len() != before {
        warn!(
            spot = %spot.name,
            dropped = before - spot.items.len(),
            "collapsed duplicate items"
        );
    }
    spot
}
