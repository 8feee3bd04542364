use super::Step;
use crate::{input, pipeline::RunCtx};
use anyhow::Result;

/// 点击屏幕上的固定坐标（如聊天输入框）。
pub struct ClickScreenPos {
    x: i32,
    y: i32,
}

impl ClickScreenPos {
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Step for ClickScreenPos {
    fn run(&self, _ctx: &mut RunCtx) -> Result<()> {
        input::click_screen(self.x, self.y)
    }

    fn label(&self) -> &'static str {
        "ClickScreenPos"
    }
}
