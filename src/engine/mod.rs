mod output;
mod query;
mod render;
mod request;
mod resolver;
mod similarity;

pub use output::{Output, OutputBlock};

pub use query::{items_of_spot, spots_matching, spots_with_all_items, spots_with_item};

pub use render::{
    GATHER_COMMAND, SPOT_COMMAND, USAGE_COMMANDS, render_item_outcome, render_spot_outcome,
    render_usage,
};

pub use request::{
    Correction, ItemQueryOutcome, SpotQueryOutcome, resolve_item_query, resolve_spot_query,
    split_item_query,
};

pub use resolver::{ITEM_CUTOFF, NameResolver, Resolution, SPOT_CUTOFF, VocabularyKind};
pub use similarity::{SequenceMatcher, similarity_at_least};
