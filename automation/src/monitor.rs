use crate::pipeline::{Pipeline, RunCtx};
use crate::screen::ScreenRegion;
use anyhow::Result;
use std::{thread, time::Duration};
use vision::{Badge, BadgeDetector};

/// 轮询节奏配置。
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    /// 空闲时两次检测之间的间隔。
    pub idle_poll: Duration,
    /// 回复一条消息后，等待界面稳定再复查的时长。
    pub settle: Duration,
    /// 一批消息处理完毕后的冷却时长。
    pub cooldown: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            idle_poll: Duration::from_secs(1),
            settle: Duration::from_secs(2),
            cooldown: Duration::from_secs(5),
        }
    }
}

/// 监控循环：检测 → 回复 → 复查，周而复始，直到进程被外部信号中断。
///
/// 核心检测器本身无状态，批次内剩余红点、轮询节奏等状态全部由本结构
/// 驱动；循环只会在两次检测之间被打断，不支持单次检测中途取消。
pub struct Watcher {
    screen: ScreenRegion,
    detector: BadgeDetector,
    reply: Pipeline,
    options: WatchOptions,
}

impl Watcher {
    pub fn new(
        screen: ScreenRegion,
        detector: BadgeDetector,
        reply: Pipeline,
        options: WatchOptions,
    ) -> Self {
        Self {
            screen,
            detector,
            reply,
            options,
        }
    }

    /// 截取检测区域并返回按 Y 升序排列的红点列表。
    fn detect(&self) -> Result<Vec<Badge>> {
        let image = self.screen.capture()?;
        Ok(self.detector.detect(&image, self.screen.origin())?)
    }

    /// 处理一批红点：逐个回复，每次回复后等待界面稳定并复查；
    /// 区域里已经没有红点时提前结束本批。
    fn reply_batch(&self, badges: &[Badge]) -> Result<()> {
        for (i, badge) in badges.iter().enumerate() {
            println!(
                "处理第 {} 个未读消息 (位置: {}, {})",
                i + 1,
                badge.screen_x,
                badge.screen_y
            );
            let mut ctx = RunCtx::with_target(badge.clone());
            self.reply.run(&mut ctx)?;

            thread::sleep(self.options.settle);
            if self.detect()?.is_empty() {
                println!("所有未读消息已处理完毕");
                break;
            }
        }
        Ok(())
    }

    /// 无限轮询。单次检测失败只影响本轮，等待下个周期重试；
    /// 输入模拟失败（如缺少辅助功能权限）则向上传递并终止循环。
    pub fn run(&self) -> Result<()> {
        loop {
            let badges = match self.detect() {
                Ok(badges) => badges,
                Err(err) => {
                    println!("本轮检测失败，稍后重试: {err:?}");
                    thread::sleep(self.options.idle_poll);
                    continue;
                }
            };

            if badges.is_empty() {
                thread::sleep(self.options.idle_poll);
                continue;
            }

            println!("检测到 {} 个红色圆圈未读消息", badges.len());
            self.reply_batch(&badges)?;

            println!("等待新消息...");
            thread::sleep(self.options.cooldown);
        }
    }
}
