mod loader;
mod model;
mod validator;

pub use loader::{
    LoadError, VocabularyFormat, load_vocabulary_from_file, load_vocabulary_from_json_str,
    load_vocabulary_from_str, load_vocabulary_from_toml_str,
};

// Minimal, intentional surface area: re-export only what the engine uses.
pub use model::{Spot, VocabularyIndex};
pub use validator::{ValidationError, validate_spots};
