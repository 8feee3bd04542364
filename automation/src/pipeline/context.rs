use vision::Badge;

/// 运行上下文：缓存当前待处理的红点目标，供各步骤读取。
///
/// 监控循环为每个红点创建新的上下文，流水线内的步骤只读取目标，
/// 不会跨红点共享状态。
#[derive(Default)]
pub struct RunCtx {
    target: Option<Badge>,
}

impl RunCtx {
    /// 创建绑定红点目标的上下文。
    pub fn with_target(badge: Badge) -> Self {
        Self {
            target: Some(badge),
        }
    }

    /// 读取当前红点目标（如果存在）。
    pub fn target(&self) -> Option<&Badge> {
        self.target.as_ref()
    }
}
