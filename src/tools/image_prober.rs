use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// 圖片尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize)]
struct FfprobeOutput {
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// 使用 ffprobe 取得圖片尺寸
pub fn probe_image_info(path: &Path) -> Result<ImageInfo> {
    let output = Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
        .arg(path)
        .output()
        .with_context(|| format!("無法執行 ffprobe: {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffprobe 執行失敗: {}", stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_image_info(&stdout).with_context(|| format!("無法解析 ffprobe 輸出: {}", path.display()))
}

/// 從 ffprobe 的 JSON 輸出解析圖片尺寸
///
/// 圖片在 ffprobe 中是單幀的 video 串流
fn parse_image_info(json: &str) -> Result<ImageInfo> {
    let probe: FfprobeOutput = serde_json::from_str(json)?;

    let stream = probe
        .streams
        .as_ref()
        .and_then(|streams| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
        })
        .ok_or_else(|| anyhow::anyhow!("找不到圖片串流"))?;

    let width = stream
        .width
        .ok_or_else(|| anyhow::anyhow!("無法取得圖片寬度"))?;
    let height = stream
        .height
        .ok_or_else(|| anyhow::anyhow!("無法取得圖片高度"))?;

    if width == 0 || height == 0 {
        bail!("圖片尺寸無效: {width}x{height}");
    }

    Ok(ImageInfo { width, height })
}
