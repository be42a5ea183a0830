use crate::cli::Cli;
use crate::config::types::{
    DEFAULT_FPS, DEFAULT_IMAGE_DURATION, DEFAULT_LOG_FILE, DEFAULT_MAX_IMAGES,
    DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_RESOLUTION, ImageTypeTable, Language, Settings,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 編譯時嵌入的圖片類型表（不需要外部檔案）
const IMAGE_TYPE_TABLE_JSON: &str = include_str!("../data/image_type_table.json");

impl ImageTypeTable {
    /// 從編譯時嵌入的 JSON 載入圖片類型表
    pub fn load_embedded() -> Result<Self> {
        serde_json::from_str(IMAGE_TYPE_TABLE_JSON).context("無法解析嵌入的圖片類型表")
    }
}

/// config.json 的內容，所有欄位皆為選填
///
/// 不認得的鍵一律忽略
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub folder_path: Option<PathBuf>,
    pub max_images: Option<i64>,
    pub output_resolution: Option<u32>,
    pub image_duration: Option<f64>,
    pub fps: Option<u32>,
    pub output_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub language: Option<Language>,
}

impl ConfigFile {
    /// 讀取設定檔
    ///
    /// 檔案不存在或格式錯誤都不是致命錯誤：回傳預設值，
    /// 並附上一則警告訊息讓呼叫端在 logging 就緒後記錄
    pub fn load(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (
                Self::default(),
                Some(format!("找不到設定檔 {}，使用預設值", path.display())),
            );
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return (
                    Self::default(),
                    Some(format!("無法讀取設定檔 {}: {e}", path.display())),
                );
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("無法解析設定檔 {}: {e}", path.display())),
            ),
        }
    }
}

impl Settings {
    /// 合併三層參數來源：內建預設值 < 設定檔 < 命令列
    #[must_use]
    pub fn resolve(cli: &Cli, file: ConfigFile) -> Self {
        Self {
            folder_path: cli.folder_path.clone().or(file.folder_path),
            max_images: cli.max_images.or(file.max_images).unwrap_or(DEFAULT_MAX_IMAGES),
            output_resolution: cli
                .output_resolution
                .or(file.output_resolution)
                .unwrap_or(DEFAULT_OUTPUT_RESOLUTION),
            image_duration: cli
                .image_duration
                .or(file.image_duration)
                .unwrap_or(DEFAULT_IMAGE_DURATION),
            fps: cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS),
            output_file: cli
                .output_file
                .clone()
                .or(file.output_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            log_file: cli
                .log_file
                .clone()
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            language: file.language.unwrap_or_default(),
        }
    }
}
