use anyhow::{Result, anyhow};

mod context;
mod steps;
mod wechat;
pub use context::*;
pub use steps::*;
pub use wechat::*;

/// 流水线：由若干 `Step` 组成，按顺序执行，描述一条未读消息的完整回复流程。
pub struct Pipeline {
    steps: Vec<Box<dyn Step + Send + Sync>>, // Send+Sync to ease future threading
}

impl Pipeline {
    /// 创建空流水线。
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// 追加一个步骤，返回自身以便链式调用。
    pub fn step(mut self, s: impl Step + Send + Sync + 'static) -> Self {
        self.steps.push(Box::new(s));
        self
    }

    /// 依次执行流水线中的所有步骤，任一步骤错误将被向上传递。
    pub fn run(&self, ctx: &mut RunCtx) -> Result<()> {
        for (i, step) in self.steps.iter().enumerate() {
            println!("[step {:02}] {}", i, step.label());
            step.run(ctx)
                .map_err(|err| anyhow!("step {} throw error: {:?}", i, err))?;
        }
        Ok(())
    }
}
