mod input;
mod monitor;
mod pipeline;
mod screen;

use anyhow::Result;
use std::env;

/// CLI 入口：默认进入监控循环；传入 `debug` 则只做一次检测，保存可视化结果后退出。
fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mode = args.first().map(String::as_str).unwrap_or("watch");

    match mode {
        "watch" => {
            println!("开始监控微信未读消息...");
            println!("监控区域: {:?}", pipeline::DETECTION_AREA);
            println!("按 Ctrl+C 停止监控");
            let watcher = pipeline::wechat_watcher()?;
            watcher.run()
        }
        "debug" => pipeline::wechat_debug(),
        other => anyhow::bail!("未知模式: {other}。用法：automation [watch|debug]"),
    }
}
