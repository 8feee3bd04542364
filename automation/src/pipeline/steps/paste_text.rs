use super::Step;
use crate::{input, pipeline::RunCtx};
use anyhow::Result;

/// 通过剪贴板把文本粘贴到当前焦点控件。
pub struct PasteText {
    text: String,
}

impl PasteText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Step for PasteText {
    fn run(&self, _ctx: &mut RunCtx) -> Result<()> {
        input::paste_text(&self.text)
    }

    fn label(&self) -> &'static str {
        "PasteText"
    }
}
