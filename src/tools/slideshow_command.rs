use crate::tools::ImageInfo;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 單一片段：一張圖片與其顯示秒數
#[derive(Debug, Clone)]
pub struct ClipSpec {
    pub path: PathBuf,
    pub duration_seconds: f64,
}

/// 輸出畫布
///
/// 寬高皆為偶數（編碼器要求）。scale_to_fit 表示圖片要先
/// 等比縮放進畫布，否則僅置中加黑邊、保持原始大小
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub scale_to_fit: bool,
}

const fn round_up_even(value: u32) -> u32 {
    if value % 2 == 0 { value } else { value + 1 }
}

/// 依選定圖片的尺寸決定輸出畫布
///
/// output_resolution > 0：高度固定為 output_resolution，寬度取
/// 各圖片等比縮放到該高度後的最大寬度，讓不同長寬比的圖片
/// 都能以黑邊置中並排在同一個畫布上。
/// output_resolution == 0：不縮放，畫布取所有圖片的最大寬高。
/// 沒有任何可用的尺寸資訊時回傳 None
#[must_use]
pub fn compute_canvas(infos: &[ImageInfo], output_resolution: u32) -> Option<Canvas> {
    if infos.is_empty() {
        return None;
    }

    if output_resolution == 0 {
        let width = infos.iter().map(|info| info.width).max()?;
        let height = infos.iter().map(|info| info.height).max()?;
        return Some(Canvas {
            width: round_up_even(width),
            height: round_up_even(height),
            scale_to_fit: false,
        });
    }

    let height = round_up_even(output_resolution);
    let width = infos
        .iter()
        .map(|info| {
            let scaled =
                (f64::from(info.width) * f64::from(height) / f64::from(info.height)).round();
            (scaled as u32).max(2)
        })
        .max()?;

    Some(Canvas {
        width: round_up_even(width),
        height,
        scale_to_fit: true,
    })
}

/// 建立 ffmpeg 濾鏡鏈
///
/// 縮放時以 force_original_aspect_ratio=decrease 保持長寬比，
/// 再以 pad 置中補黑邊（與畫布不同長寬比的圖片形成 letterbox）
#[must_use]
pub fn build_filter(canvas: Canvas) -> String {
    let Canvas {
        width,
        height,
        scale_to_fit,
    } = canvas;

    let pad = format!("pad={width}:{height}:(ow-iw)/2:(oh-ih)/2:black,setsar=1,format=yuv420p");

    if scale_to_fit {
        format!("scale={width}:{height}:force_original_aspect_ratio=decrease,{pad}")
    } else {
        pad
    }
}

/// concat 列表中的路徑以單引號包住，內含的單引號需要跳脫
fn escape_concat_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', r"'\''")
}

/// 產生 concat demuxer 的列表內容
///
/// 每張圖片一組 file/duration 指令；最後一張要再重複一次，
/// 否則 concat demuxer 會忽略最後一個 duration
#[must_use]
pub fn build_concat_list(clips: &[ClipSpec]) -> String {
    let mut list = String::from("ffconcat version 1.0\n");

    for clip in clips {
        let _ = writeln!(list, "file '{}'", escape_concat_path(&clip.path));
        let _ = writeln!(list, "duration {:.6}", clip.duration_seconds);
    }

    if let Some(last) = clips.last() {
        let _ = writeln!(list, "file '{}'", escape_concat_path(&last.path));
    }

    list
}

/// 合成影片的 ffmpeg 命令
pub struct SlideshowCommand {
    concat_list_path: PathBuf,
    filter: String,
    fps: u32,
    output_file: PathBuf,
}

impl SlideshowCommand {
    #[must_use]
    pub fn new(concat_list_path: &Path, canvas: Canvas, fps: u32, output_file: &Path) -> Self {
        Self {
            concat_list_path: concat_list_path.to_path_buf(),
            filter: build_filter(canvas),
            fps,
            output_file: output_file.to_path_buf(),
        }
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new("ffmpeg");

        cmd.args([
            "-hide_banner",
            "-nostdin",
            "-loglevel", "error",
            "-f", "concat",
            "-safe", "0",
            "-i",
        ])
        .arg(&self.concat_list_path)
        .args(["-vf", &self.filter])
        .args(["-r", &self.fps.to_string()])
        .args(["-c:v", "libx264", "-preset", "medium", "-y"])
        .arg(&self.output_file);

        cmd
    }
}
