use super::Step;
use crate::pipeline::RunCtx;
use anyhow::Result;
use std::{thread, time::Duration};

/// 固定时长的等待/休眠步骤。
///
/// 用途
/// - 在点开会话、切换焦点等场景插入一个短暂的时间缓冲，等待界面稳定后再继续。
///
/// 参数
/// - `SleepMs(ms)`: 休眠的毫秒数。
///
/// 注意
/// - 此步骤为“硬等待”，不做条件判断。
pub struct SleepMs(pub u64);

impl Step for SleepMs {
    fn run(&self, _ctx: &mut RunCtx) -> Result<()> {
        thread::sleep(Duration::from_millis(self.0));
        Ok(())
    }
}
