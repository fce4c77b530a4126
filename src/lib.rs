pub mod config;
pub mod engine;
pub mod vocab;

use std::sync::Arc;

use tracing::debug;

use engine::{
    GATHER_COMMAND, Output, SPOT_COMMAND, USAGE_COMMANDS, render_item_outcome,
    render_spot_outcome, render_usage, resolve_item_query, resolve_spot_query,
};
use vocab::VocabularyIndex;

pub use config::{AppConfig, ConfigError, load_config_from_file, load_config_from_str};
pub use vocab::{
    LoadError, load_vocabulary_from_file, load_vocabulary_from_json_str,
    load_vocabulary_from_toml_str,
};

/// Command front end over a shared, read-only vocabulary.
pub struct SpotFinder {
    pub index: Arc<VocabularyIndex>,
    pub command_prefix: String,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmSpotFinder {
        finder: SpotFinder,
    }

    #[wasm_bindgen]
    impl WasmSpotFinder {
        /// Create a finder from a JSON vocabulary (`{ "spot": ["item", ...] }`).
        #[wasm_bindgen(constructor)]
        pub fn new(vocabulary_json: &str) -> Result<WasmSpotFinder, JsValue> {
            let index = load_vocabulary_from_json_str(vocabulary_json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmSpotFinder {
                finder: SpotFinder::new(Arc::new(index), "!"),
            })
        }

        /// Run one command line and return the output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&self, input: &str) -> JsValue {
            let (out, quit) = self.finder.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl SpotFinder {
    pub fn new(index: Arc<VocabularyIndex>, command_prefix: impl Into<String>) -> Self {
        SpotFinder {
            index,
            command_prefix: command_prefix.into(),
        }
    }

    /// Process a single input line; returns (output, quit?)
    pub fn step(&self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        let input = input.trim();
        let lower = input.to_lowercase();

        if lower == "quit" || lower == "exit" {
            out.say("안녕히 가세요.");
            return (out, true);
        }

        let Some(body) = input.strip_prefix(self.command_prefix.as_str()) else {
            out.say(format!(
                "명령어는 {}{} 로 확인할 수 있어요.",
                self.command_prefix, USAGE_COMMANDS[0]
            ));
            return (out, false);
        };

        let (command, rest) = body
            .split_once(char::is_whitespace)
            .unwrap_or((body, ""));
        debug!(command, args = rest, "dispatching command");

        if command == GATHER_COMMAND {
            let outcome = resolve_item_query(&self.index, rest);
            render_item_outcome(&mut out, &outcome, &self.command_prefix);
        } else if command == SPOT_COMMAND {
            if rest.trim().is_empty() {
                render_usage(&mut out, &self.command_prefix);
            } else {
                let outcome = resolve_spot_query(&self.index, rest);
                render_spot_outcome(&mut out, &outcome);
            }
        } else if USAGE_COMMANDS.contains(&command) {
            render_usage(&mut out, &self.command_prefix);
        } else {
            out.say(format!(
                "알 수 없는 명령어예요: {}{}\n{}{} 로 사용법을 확인해주세요.",
                self.command_prefix, command, self.command_prefix, USAGE_COMMANDS[0]
            ));
        }

        (out, false)
    }
}
