use super::Step;
use crate::{input, pipeline::RunCtx};
use anyhow::Result;

/// 模拟回车键，发送当前输入框中的消息。
pub struct PressEnter;

impl Step for PressEnter {
    fn run(&self, _ctx: &mut RunCtx) -> Result<()> {
        input::press_enter()
    }

    fn label(&self) -> &'static str {
        "PressEnter"
    }
}
