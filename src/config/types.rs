use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// 工作目錄下的設定檔名稱
pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_MAX_IMAGES: i64 = 10;
pub const DEFAULT_OUTPUT_RESOLUTION: u32 = 1080;
pub const DEFAULT_IMAGE_DURATION: f64 = 1.0;
pub const DEFAULT_FPS: u32 = 24;
pub const DEFAULT_OUTPUT_FILE: &str = "output_video.mp4";
pub const DEFAULT_LOG_FILE: &str = "process.log";

/// 可辨識的圖片副檔名表
///
/// RAW 檔需要先轉換為 JPEG，一般點陣圖格式直接使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTypeTable {
    #[serde(rename = "RAW_FILE")]
    pub raw_file: Vec<String>,
    #[serde(rename = "RASTER_FILE")]
    pub raster_file: Vec<String>,
}

impl ImageTypeTable {
    fn extension_set(extensions: &[String]) -> HashSet<String> {
        extensions.iter().map(|ext| ext.to_lowercase()).collect()
    }

    fn matches(extensions: &[String], path: &Path) -> bool {
        let set = Self::extension_set(extensions);
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| set.contains(&format!(".{}", ext.to_lowercase())))
    }

    #[must_use]
    pub fn is_raw_file(&self, path: &Path) -> bool {
        Self::matches(&self.raw_file, path)
    }

    #[must_use]
    pub fn is_raster_file(&self, path: &Path) -> bool {
        Self::matches(&self.raster_file, path)
    }

    /// 副檔名比對不分大小寫
    #[must_use]
    pub fn is_recognized(&self, path: &Path) -> bool {
        self.is_raw_file(path) || self.is_raster_file(path)
    }
}

/// 介面語言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
            Self::ZhCn => "zh-CN",
            Self::JaJp => "ja-JP",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解析完成的執行參數
///
/// 除了 folder_path 之外每個欄位都有確定的預設值，
/// 因此空的設定檔加上資料夾路徑就足以執行整個流程
#[derive(Debug, Clone)]
pub struct Settings {
    pub folder_path: Option<PathBuf>,
    pub max_images: i64,
    pub output_resolution: u32,
    pub image_duration: f64,
    pub fps: u32,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
    pub language: Language,
}
