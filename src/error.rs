use std::path::PathBuf;
use thiserror::Error;

/// 管線層級的錯誤分類
///
/// 單張圖片的轉換失敗不在此列，失敗的圖片只會被記錄並略過；
/// 只有完全沒有可用輸入或編碼失敗才會中止整個流程
#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("未提供圖片資料夾路徑")]
    NoFolder,

    #[error("找不到任何可用的圖片: {}", folder.display())]
    NoImages { folder: PathBuf },

    #[error("影片合成失敗: {0:#}")]
    Encode(anyhow::Error),
}
