use super::steps::*;
use crate::monitor::{WatchOptions, Watcher};
use crate::pipeline::Pipeline;
use crate::screen::{RegionRect, ScreenRegion};
use anyhow::Result;
use vision::{BadgeDetector, DetectorConfig, save_debug_visualization};

/// 微信会话列表中未读红点所在的屏幕区域。
pub const DETECTION_AREA: RegionRect = RegionRect {
    x: 2159,
    y: 886,
    width: 395,
    height: 1193,
};

/// 微信聊天输入框的屏幕坐标。
const INPUT_BOX: (i32, i32) = (2583, 1780);

/// 自动回复的内容。
const REPLY_TEXT: &str = "☺Working!I may be slow to respond!";

/// 微信未读消息监控器：绑定检测区域、红点检测器与回复流水线。
pub fn wechat_watcher() -> Result<Watcher> {
    let screen = ScreenRegion::new(DETECTION_AREA)?;
    let detector = BadgeDetector::new(DetectorConfig::default());
    Ok(Watcher::new(
        screen,
        detector,
        reply_pipeline(),
        WatchOptions::default(),
    ))
}

/// 单条未读消息的处理流程：点开会话、聚焦输入框、粘贴并发送。
fn reply_pipeline() -> Pipeline {
    Pipeline::new()
        .step(DebugStep::new("检测到未读消息，正在处理..."))
        .step(ClickTarget)
        .step(SleepMs(1500)) // 等待聊天窗口打开
        .step(ClickScreenPos::at(INPUT_BOX.0, INPUT_BOX.1))
        .step(SleepMs(500))
        .step(ClickScreenPos::at(INPUT_BOX.0, INPUT_BOX.1))
        .step(PasteText::new(REPLY_TEXT))
        .step(PressEnter)
        .step(DebugStep::new("消息已发送"))
        .step(ClickScreenPos::at(INPUT_BOX.0, INPUT_BOX.1))
        .step(SleepMs(500))
}

/// 调试入口：截取一次检测区域，打印红点列表并保存可视化结果。
pub fn wechat_debug() -> Result<()> {
    let screen = ScreenRegion::new(DETECTION_AREA)?;
    let detector = BadgeDetector::new(DetectorConfig::default());

    let image = screen.capture()?;
    let badges = detector.detect(&image, screen.origin())?;
    println!("检测到 {} 个红点", badges.len());
    for badge in &badges {
        match badge.circularity {
            Some(c) => println!(
                "  ({}, {}) area={:.1} circularity={:.3}",
                badge.screen_x, badge.screen_y, badge.area, c
            ),
            None => println!(
                "  ({}, {}) area={:.1}",
                badge.screen_x, badge.screen_y, badge.area
            ),
        }
    }

    save_debug_visualization(&image, &badges, screen.origin(), "debug_red_detection.png")?;
    println!("可视化结果已保存到 debug_red_detection.png");
    Ok(())
}
