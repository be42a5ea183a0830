//! 照片快播影片元件
//!
//! 將資料夾內的照片依修改時間串接成單一影片

mod folder_source;
mod main;
mod selector;

pub use folder_source::resolve_folder_path;
pub use main::{RunSummary, SlideshowGenerator};
pub use selector::select_images;
