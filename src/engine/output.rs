use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Entry(String),
    Field { name: String, value: String },
    Footer(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_text(&mut self, s: String, block: fn(String) -> OutputBlock) {
        if !s.trim().is_empty() {
            self.blocks.push(block(s));
        }
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.push_text(s.into(), OutputBlock::Title);
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.push_text(s.into(), OutputBlock::Text);
    }

    pub fn entry(&mut self, s: impl Into<String>) {
        self.push_text(s.into(), OutputBlock::Entry);
    }

    pub fn field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        if !name.trim().is_empty() && !value.trim().is_empty() {
            self.blocks.push(OutputBlock::Field { name, value });
        }
    }

    pub fn set_footer(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Footer block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Footer(_)));
        self.blocks.push(OutputBlock::Footer(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_dropped() {
        let mut out = Output::new();
        out.title("  ");
        out.say("");
        out.entry(" ");
        out.field("name", " ");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn text_blocks_keep_call_order() {
        let mut out = Output::new();
        out.title("📍 기지");
        out.say("목록");
        out.entry("🌿 오드");

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Title("📍 기지".to_string()),
                OutputBlock::Text("목록".to_string()),
                OutputBlock::Entry("🌿 오드".to_string()),
            ]
        );
    }

    #[test]
    fn footer_stays_single_and_last() {
        let mut out = Output::new();
        out.set_footer("first");
        out.say("body");
        out.set_footer("second");

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("body".to_string()),
                OutputBlock::Footer("second".to_string()),
            ]
        );
    }
}
