mod file_tools;
mod image_converter;
mod image_prober;
mod image_scanner;
mod slideshow_command;

pub use file_tools::{ensure_directory_exists, verify_output};
pub use image_converter::{
    ImageKind, classify_image, convert_images_parallel, converted_output_path,
};
pub use image_prober::{ImageInfo, probe_image_info};
pub use image_scanner::{ImageFileInfo, scan_image_files};
pub use slideshow_command::{
    Canvas, ClipSpec, SlideshowCommand, build_concat_list, build_filter, compute_canvas,
};
