use crate::config::ImageTypeTable;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 圖片格式分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Raw,
    Raster,
    Unrecognized,
}

/// 依副檔名分類圖片
#[must_use]
pub fn classify_image(path: &Path, table: &ImageTypeTable) -> ImageKind {
    if table.is_raw_file(path) {
        ImageKind::Raw
    } else if table.is_raster_file(path) {
        ImageKind::Raster
    } else {
        ImageKind::Unrecognized
    }
}

/// RAW 檔轉換後的輸出路徑：同目錄同主檔名，副檔名改為 .jpg
#[must_use]
pub fn converted_output_path(raw_path: &Path) -> PathBuf {
    raw_path.with_extension("jpg")
}

/// 將單張 RAW 檔解碼並轉存為 JPEG
///
/// 解碼與重新編碼都交給外部 ffmpeg，原始 RAW 檔保持不動
fn convert_raw_to_jpeg(raw_path: &Path, output_path: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .args(["-hide_banner", "-nostdin", "-loglevel", "error", "-i"])
        .arg(raw_path)
        .args(["-frames:v", "1", "-q:v", "2", "-y"])
        .arg(output_path)
        .output()
        .with_context(|| format!("無法執行 ffmpeg 轉換: {}", raw_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg 轉換失敗: {}", stderr.trim());
    }

    if !output_path.exists() {
        anyhow::bail!("轉換後的檔案未建立: {}", output_path.display());
    }

    Ok(())
}

/// 處理單張圖片
///
/// RAW 檔轉成 JPEG 並回傳新路徑，一般格式原樣回傳，
/// 不認得的格式與轉換失敗的圖片回傳 None
fn process_image(path: &Path, table: &ImageTypeTable) -> Option<PathBuf> {
    match classify_image(path, table) {
        ImageKind::Raw => {
            let output_path = converted_output_path(path);
            match convert_raw_to_jpeg(path, &output_path) {
                Ok(()) => Some(output_path),
                Err(e) => {
                    error!("轉換圖片失敗 {}: {e:#}", path.display());
                    None
                }
            }
        }
        ImageKind::Raster => Some(path.to_path_buf()),
        ImageKind::Unrecognized => None,
    }
}

/// 平行轉換所有圖片，結果保持輸入順序
///
/// 每張圖片是獨立任務，單張失敗只會被記錄並剔除，
/// 不影響其他任務，也不會中斷整個 worker pool
pub fn convert_images_parallel(paths: &[PathBuf], table: &ImageTypeTable) -> Vec<PathBuf> {
    let progress_bar = ProgressBar::new(paths.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    progress_bar.set_message("轉換圖片中...");

    // map + collect 依提交順序收集結果，而不是完成順序
    let results: Vec<Option<PathBuf>> = paths
        .par_iter()
        .map(|path| {
            let result = process_image(path, table);
            progress_bar.inc(1);
            result
        })
        .collect();

    progress_bar.finish_with_message("轉換完成");

    results.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ImageTypeTable {
        ImageTypeTable::load_embedded().unwrap()
    }

    #[test]
    fn test_classify_image() {
        let table = table();
        assert_eq!(classify_image(Path::new("a.cr2"), &table), ImageKind::Raw);
        assert_eq!(classify_image(Path::new("a.CR2"), &table), ImageKind::Raw);
        assert_eq!(classify_image(Path::new("b.jpg"), &table), ImageKind::Raster);
        assert_eq!(classify_image(Path::new("c.png"), &table), ImageKind::Raster);
        assert_eq!(
            classify_image(Path::new("d.txt"), &table),
            ImageKind::Unrecognized
        );
    }

    #[test]
    fn test_converted_output_path() {
        assert_eq!(
            converted_output_path(Path::new("/photos/IMG_0001.cr2")),
            PathBuf::from("/photos/IMG_0001.jpg")
        );
    }

    #[test]
    fn test_converted_output_path_with_dots() {
        assert_eq!(
            converted_output_path(Path::new("/photos/trip.day1.cr2")),
            PathBuf::from("/photos/trip.day1.jpg")
        );
    }

    #[test]
    fn test_raster_files_pass_through_in_order() {
        // 沒有 RAW 檔時不會呼叫外部程式，結果必須是恆等映射
        let paths = vec![
            PathBuf::from("/photos/c.png"),
            PathBuf::from("/photos/a.jpg"),
            PathBuf::from("/photos/b.jpeg"),
        ];

        let results = convert_images_parallel(&paths, &table());
        assert_eq!(results, paths);
    }

    #[test]
    fn test_unrecognized_files_are_dropped() {
        let paths = vec![
            PathBuf::from("/photos/a.jpg"),
            PathBuf::from("/photos/notes.txt"),
            PathBuf::from("/photos/b.png"),
        ];

        let results = convert_images_parallel(&paths, &table());
        assert_eq!(
            results,
            vec![PathBuf::from("/photos/a.jpg"), PathBuf::from("/photos/b.png")]
        );
    }
}
