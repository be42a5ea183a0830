use anyhow::{Context, Result};
use log::{error, info};
use std::fs;
use std::path::Path;

/// 建立目錄（已存在時不動作）
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("無法建立目錄: {}", path.display()))
}

/// 影片寫出後的最終確認：檔案存在且非空
///
/// 只記錄結果，不重試也不回滾
pub fn verify_output(output_file: &Path) -> bool {
    match fs::metadata(output_file) {
        Ok(metadata) if metadata.len() > 0 => {
            info!("影片已成功建立: {}", output_file.display());
            true
        }
        Ok(_) => {
            error!("影片檔案是空的: {}", output_file.display());
            false
        }
        Err(_) => {
            error!("影片建立失敗，找不到輸出檔案: {}", output_file.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // 重複呼叫不應該失敗
        ensure_directory_exists(&nested).unwrap();
    }

    #[test]
    fn test_verify_output_with_content() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.mp4");
        fs::write(&output, b"video data").unwrap();

        assert!(verify_output(&output));
    }

    #[test]
    fn test_verify_output_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.mp4");
        fs::write(&output, b"").unwrap();

        assert!(!verify_output(&output));
    }

    #[test]
    fn test_verify_output_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!verify_output(&temp_dir.path().join("missing.mp4")));
    }
}
