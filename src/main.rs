use clap::Parser;
use console::style;
use log::{error, warn};
use photo_slideshow::cli::Cli;
use photo_slideshow::component::SlideshowGenerator;
use photo_slideshow::config::{CONFIG_FILE, ConfigFile, ImageTypeTable, Settings};
use photo_slideshow::init;
use std::path::Path;
use std::process::ExitCode;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 設定檔讀取失敗不中斷流程，警告留到 logging 初始化後再記錄
    let (file_config, config_warning) = ConfigFile::load(Path::new(CONFIG_FILE));
    let settings = Settings::resolve(&cli, file_config);

    if let Err(e) = init::init_logging(&settings.log_file) {
        eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
        return ExitCode::FAILURE;
    }

    rust_i18n::set_locale(settings.language.as_str());

    if let Some(warning) = config_warning {
        warn!("{warning}");
    }

    let table = match ImageTypeTable::load_embedded() {
        Ok(table) => table,
        Err(e) => {
            error!("無法載入圖片類型表: {e:#}");
            eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
            return ExitCode::FAILURE;
        }
    };

    let generator = SlideshowGenerator::new(settings, table);

    match generator.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("影片生成中止: {e}");
            eprintln!("{} {e}", style(t!("common.error_prefix")).red().bold());
            ExitCode::FAILURE
        }
    }
}
