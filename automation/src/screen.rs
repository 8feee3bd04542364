use anyhow::{Result, anyhow};
use xcap::{
    Monitor,
    image::{RgbaImage, imageops},
};

/// 屏幕上的固定检测区域（绝对坐标，单位像素）。
#[derive(Debug, Clone, Copy)]
pub struct RegionRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// 包装 `xcap::Monitor`，负责截取检测区域并提供坐标换算用的原点。
pub struct ScreenRegion {
    monitor: Monitor,
    rect: RegionRect,
}

impl ScreenRegion {
    /// 选择主显示器（找不到时退回第一块屏幕）并绑定检测区域。
    pub fn new(rect: RegionRect) -> Result<Self> {
        let mut monitors = Monitor::all()?;
        if monitors.is_empty() {
            return Err(anyhow!("未找到可用的显示器"));
        }
        let idx = monitors
            .iter()
            .position(|m| m.is_primary().unwrap_or(false))
            .unwrap_or(0);
        let monitor = monitors.swap_remove(idx);

        Ok(Self { monitor, rect })
    }

    /// 检测区域左上角的屏幕坐标，检测结果以此为偏移换算。
    pub fn origin(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }

    /// 截取整块屏幕后裁剪出检测区域，返回 RGBA 图像。
    ///
    /// 区域超出截图范围视为错误，避免把尺寸不符的缓冲区交给检测器。
    pub fn capture(&self) -> Result<RgbaImage> {
        let frame = self.monitor.capture_image()?;

        let local_x = self.rect.x - self.monitor.x()?;
        let local_y = self.rect.y - self.monitor.y()?;
        if local_x < 0
            || local_y < 0
            || local_x as u32 + self.rect.width > frame.width()
            || local_y as u32 + self.rect.height > frame.height()
        {
            return Err(anyhow!(
                "检测区域超出屏幕范围: region={:?}, frame={}x{}",
                self.rect,
                frame.width(),
                frame.height()
            ));
        }

        let region = imageops::crop_imm(
            &frame,
            local_x as u32,
            local_y as u32,
            self.rect.width,
            self.rect.height,
        )
        .to_image();
        Ok(region)
    }
}
