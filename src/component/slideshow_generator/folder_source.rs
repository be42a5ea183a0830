use dialoguer::Input;
use log::warn;
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 決定圖片資料夾來源
///
/// 設定與命令列合併後已有路徑時直接使用；否則互動式詢問一次。
/// 詢問被取消、失敗或輸入空白時回傳 None
pub fn resolve_folder_path(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }

    match Input::<String>::new()
        .with_prompt(t!("prompt.folder_path"))
        .allow_empty(true)
        .interact_text()
    {
        Ok(input) => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            }
        }
        Err(e) => {
            warn!("無法讀取互動式輸入: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_skips_prompt() {
        let resolved = resolve_folder_path(Some(Path::new("/photos")));
        assert_eq!(resolved, Some(PathBuf::from("/photos")));
    }
}
