use crate::config::ImageTypeTable;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// 單張圖片的掃描結果
#[derive(Debug, Clone)]
pub struct ImageFileInfo {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// 掃描資料夾第一層的圖片檔案，依修改時間排序（由舊到新）
///
/// 修改時間相同時維持目錄列舉的原始順序（穩定排序），
/// 實際順序依檔案系統而定。
/// 資料夾不存在或沒有符合的檔案時回傳空列表
#[must_use]
pub fn scan_image_files(directory: &Path, table: &ImageTypeTable) -> Vec<ImageFileInfo> {
    let mut images: Vec<ImageFileInfo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| table.is_recognized(entry.path()))
        .filter_map(|entry| {
            let modified = entry.metadata().ok()?.modified().ok()?;
            Some(ImageFileInfo {
                path: entry.into_path(),
                modified,
            })
        })
        .collect();

    images.sort_by_key(|image| image.modified);
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, OpenOptions};
    use std::time::Duration;
    use tempfile::TempDir;

    fn table() -> ImageTypeTable {
        ImageTypeTable::load_embedded().unwrap()
    }

    fn write_with_mtime(path: &Path, age: Duration) {
        fs::write(path, b"test").unwrap();
        let file = OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.png"), b"test").unwrap();
        fs::write(temp_dir.path().join("b.cr2"), b"test").unwrap();
        fs::write(temp_dir.path().join("c.txt"), b"test").unwrap();
        fs::write(temp_dir.path().join("d.gif"), b"test").unwrap();

        let images = scan_image_files(temp_dir.path(), &table());

        assert_eq!(images.len(), 2);
        for image in &images {
            assert!(table().is_recognized(&image.path));
        }
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("UPPER.PNG"), b"test").unwrap();
        fs::write(temp_dir.path().join("Mixed.Jpg"), b"test").unwrap();

        let images = scan_image_files(temp_dir.path(), &table());
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn test_scan_sorts_by_modification_time() {
        let temp_dir = TempDir::new().unwrap();
        // 建立順序與修改時間刻意相反
        write_with_mtime(&temp_dir.path().join("newest.png"), Duration::from_secs(10));
        write_with_mtime(&temp_dir.path().join("oldest.png"), Duration::from_secs(300));
        write_with_mtime(&temp_dir.path().join("middle.png"), Duration::from_secs(100));

        let images = scan_image_files(temp_dir.path(), &table());

        assert_eq!(images.len(), 3);
        let names: Vec<_> = images
            .iter()
            .map(|i| i.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["oldest.png", "middle.png", "newest.png"]);
        for pair in images.windows(2) {
            assert!(pair[0].modified <= pair[1].modified);
        }
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("top.png"), b"test").unwrap();
        let sub_dir = temp_dir.path().join("sub");
        fs::create_dir(&sub_dir).unwrap();
        fs::write(sub_dir.join("nested.png"), b"test").unwrap();

        let images = scan_image_files(temp_dir.path(), &table());
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(scan_image_files(temp_dir.path(), &table()).is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let images = scan_image_files(Path::new("/nonexistent/folder"), &table());
        assert!(images.is_empty());
    }
}
