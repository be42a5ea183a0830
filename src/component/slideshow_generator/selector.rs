use std::path::PathBuf;

/// 截取前 max_images 張圖片，順序不變
///
/// max_images 小於等於 0 時回傳空列表
#[must_use]
pub fn select_images(mut images: Vec<PathBuf>, max_images: i64) -> Vec<PathBuf> {
    let keep = usize::try_from(max_images).unwrap_or(0);
    images.truncate(keep);
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_select_truncates_in_order() {
        let selected = select_images(paths(&["a", "b", "c", "d"]), 2);
        assert_eq!(selected, paths(&["a", "b"]));
    }

    #[test]
    fn test_select_keeps_short_list_unchanged() {
        let selected = select_images(paths(&["a", "b"]), 10);
        assert_eq!(selected, paths(&["a", "b"]));
    }

    #[test]
    fn test_select_is_idempotent() {
        let once = select_images(paths(&["a", "b", "c"]), 2);
        let twice = select_images(once.clone(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_zero_returns_empty() {
        assert!(select_images(paths(&["a", "b"]), 0).is_empty());
    }

    #[test]
    fn test_select_negative_returns_empty() {
        assert!(select_images(paths(&["a", "b"]), -5).is_empty());
    }

    #[test]
    fn test_select_empty_input() {
        assert!(select_images(Vec::new(), 10).is_empty());
    }
}
