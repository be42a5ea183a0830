pub mod load;
pub mod types;

pub use load::ConfigFile;
pub use types::{
    CONFIG_FILE, DEFAULT_FPS, DEFAULT_IMAGE_DURATION, DEFAULT_LOG_FILE, DEFAULT_MAX_IMAGES,
    DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_RESOLUTION, ImageTypeTable, Language, Settings,
};
