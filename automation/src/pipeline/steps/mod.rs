use crate::pipeline::RunCtx;
use anyhow::Result;
use std::any::type_name;

/// 所有步骤类型的统一接口。
///
/// 每个步骤实现 `run`，在运行上下文中执行一次原子操作（如：点击、等待、粘贴）。
/// - 步骤应当是“可重入”的：多次调用不会产生未定义副作用。
/// - 步骤不应捕获致命错误（例如权限缺失），应向上传递，交由调用方处理。
pub trait Step {
    /// 执行步骤。
    /// - `ctx`：运行上下文，包含当前待处理的红点目标；步骤可选择使用或忽略
    fn run(&self, ctx: &mut RunCtx) -> Result<()>;

    /// 返回步骤名称，默认使用类型名称，可在实现中重写以输出更友好的 label。
    fn label(&self) -> &'static str {
        type_name::<Self>()
    }
}

pub mod click_screen_pos;
pub mod click_target;
pub mod debug;
pub mod paste_text;
pub mod press_enter;
pub mod sleep_ms;

pub use click_screen_pos::ClickScreenPos;
pub use click_target::ClickTarget;
pub use debug::DebugStep;
pub use paste_text::PasteText;
pub use press_enter::PressEnter;
pub use sleep_ms::SleepMs;
