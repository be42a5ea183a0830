use clap::Parser;
use std::path::PathBuf;

/// 命令列參數
///
/// 所有參數皆為選填，未指定時依序套用 config.json 的值與內建預設值
#[derive(Debug, Default, Parser)]
#[command(name = "photo_slideshow", about = "將資料夾內的照片合成為快節奏影片")]
pub struct Cli {
    /// 圖片資料夾路徑（覆寫 config.json）
    #[arg(long)]
    pub folder_path: Option<PathBuf>,

    /// 影片最多包含的圖片數量
    #[arg(long)]
    pub max_images: Option<i64>,

    /// 輸出影片高度（0 表示不縮放）
    #[arg(long)]
    pub output_resolution: Option<u32>,

    /// 每張圖片顯示的秒數
    #[arg(long)]
    pub image_duration: Option<f64>,

    /// 輸出影片幀率
    #[arg(long)]
    pub fps: Option<u32>,

    /// 輸出影片路徑
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// 處理紀錄檔路徑
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
