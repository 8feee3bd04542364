use super::Step;
use crate::{input, pipeline::RunCtx};
use anyhow::{Result, anyhow};

/// 点击上下文中缓存的红点目标（屏幕绝对坐标），打开对应会话。
pub struct ClickTarget;

impl Step for ClickTarget {
    fn run(&self, ctx: &mut RunCtx) -> Result<()> {
        let badge = ctx
            .target()
            .ok_or_else(|| anyhow!("上下文中没有待处理的红点目标"))?;
        let (x, y) = badge.screen_point();
        println!("点击红圈位置: ({x}, {y})");
        input::click_screen(x, y)
    }

    fn label(&self) -> &'static str {
        "ClickTarget"
    }
}
