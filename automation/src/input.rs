use anyhow::Result;
use arboard::Clipboard;
use enigo::{Enigo, Key, KeyboardControllable, MouseButton, MouseControllable};
use std::{thread, time::Duration};

/// 将鼠标移动到指定屏幕坐标并模拟一次左键点击。
///
/// 为降低误触概率，会在移动后短暂停顿；若系统未授予辅助功能权限，返回错误。
pub fn click_screen(x: i32, y: i32) -> Result<()> {
    let mut enigo = Enigo::new();
    enigo.mouse_move_to(x, y);
    thread::sleep(Duration::from_millis(60));
    enigo.mouse_click(MouseButton::Left);
    Ok(())
}

/// 将文本写入剪贴板后模拟 Ctrl+V 粘贴到当前焦点控件。
///
/// 回复内容包含表情等非 ASCII 字符，直接模拟键盘输入会丢字，必须走剪贴板。
pub fn paste_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    thread::sleep(Duration::from_millis(500));

    let mut enigo = Enigo::new();
    enigo.key_down(Key::Control);
    enigo.key_click(Key::Layout('v'));
    enigo.key_up(Key::Control);
    Ok(())
}

/// 模拟回车键，提交当前输入框中的内容。
pub fn press_enter() -> Result<()> {
    let mut enigo = Enigo::new();
    enigo.key_click(Key::Return);
    Ok(())
}
