use super::folder_source::resolve_folder_path;
use super::selector::select_images;
use crate::config::{ImageTypeTable, Settings};
use crate::error::SlideshowError;
use crate::tools::{
    Canvas, ClipSpec, ImageInfo, SlideshowCommand, build_concat_list, compute_canvas,
    convert_images_parallel, ensure_directory_exists, probe_image_info, scan_image_files,
    verify_output,
};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

/// 單次執行的結果摘要
#[derive(Debug)]
pub struct RunSummary {
    pub enumerated: usize,
    pub converted: usize,
    pub selected: usize,
    pub output_verified: bool,
}

/// 照片快播影片生成器
///
/// 五階段流程：
/// A. 掃描資料夾內的圖片（依修改時間由舊到新）
/// B. 平行將 RAW 檔轉換為 JPEG
/// C. 依 max_images 截取前段
/// D. 每張圖片固定秒數，串接後編碼輸出
/// E. 確認輸出檔案存在
pub struct SlideshowGenerator {
    settings: Settings,
    image_type_table: ImageTypeTable,
}

impl SlideshowGenerator {
    #[must_use]
    pub const fn new(settings: Settings, image_type_table: ImageTypeTable) -> Self {
        Self {
            settings,
            image_type_table,
        }
    }

    pub fn run(&self) -> Result<RunSummary, SlideshowError> {
        println!("{}", style("=== 照片快播影片生成 ===").cyan().bold());

        let folder = resolve_folder_path(self.settings.folder_path.as_deref())
            .ok_or(SlideshowError::NoFolder)?;

        // 掃描圖片
        println!("{}", style("掃描圖片檔案中...").dim());
        let images = scan_image_files(&folder, &self.image_type_table);

        if images.is_empty() {
            return Err(SlideshowError::NoImages { folder });
        }

        println!(
            "{}",
            style(format!(
                "找到 {} 張圖片，依修改時間排序（由舊到新）",
                images.len()
            ))
            .green()
        );

        // 轉換 RAW 檔
        let enumerated = images.len();
        let paths: Vec<PathBuf> = images.into_iter().map(|image| image.path).collect();
        let converted = convert_images_parallel(&paths, &self.image_type_table);

        let dropped = enumerated - converted.len();
        if dropped > 0 {
            println!(
                "{}",
                style(format!("警告：{dropped} 張圖片無法處理，已跳過")).yellow()
            );
        }

        // 截取前 max_images 張
        let converted_count = converted.len();
        let selected = select_images(converted, self.settings.max_images);

        if selected.is_empty() {
            return Err(SlideshowError::NoImages { folder });
        }

        println!(
            "{}",
            style(format!("選取前 {} 張圖片製作影片", selected.len())).cyan()
        );

        // 合成影片
        self.assemble_video(&selected)
            .map_err(SlideshowError::Encode)?;

        // 最終確認輸出檔案
        let summary = RunSummary {
            enumerated,
            converted: converted_count,
            selected: selected.len(),
            output_verified: verify_output(&self.settings.output_file),
        };

        self.print_summary(&summary);

        Ok(summary)
    }

    /// 探測尺寸、決定畫布、寫入串接列表並執行編碼
    fn assemble_video(&self, selected: &[PathBuf]) -> Result<()> {
        // 探測失敗的圖片只跳過畫布計算，不會被剔除
        let infos: Vec<ImageInfo> = selected
            .iter()
            .filter_map(|path| match probe_image_info(path) {
                Ok(info) => Some(info),
                Err(e) => {
                    warn!("無法取得圖片尺寸 {}: {e:#}", path.display());
                    None
                }
            })
            .collect();

        let canvas = compute_canvas(&infos, self.settings.output_resolution)
            .context("無法取得任何圖片尺寸，無法決定輸出畫布")?;

        info!(
            "輸出畫布: {}x{}，每張 {:.2} 秒，幀率 {} fps",
            canvas.width, canvas.height, self.settings.image_duration, self.settings.fps
        );

        // concat 列表放在暫存目錄，路徑必須是絕對路徑
        let clips = selected
            .iter()
            .map(|path| {
                let absolute = std::path::absolute(path)
                    .with_context(|| format!("無法取得絕對路徑: {}", path.display()))?;
                Ok(ClipSpec {
                    path: absolute,
                    duration_seconds: self.settings.image_duration,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let temp_dir = std::env::temp_dir().join(format!("photo_slideshow_{}", Uuid::new_v4()));
        ensure_directory_exists(&temp_dir)?;

        let result = self.encode_clips(&clips, canvas, &temp_dir);

        // 清理暫存目錄
        if temp_dir.exists() && fs::remove_dir_all(&temp_dir).is_err() {
            warn!("無法清理暫存目錄: {}", temp_dir.display());
        }

        result
    }

    fn encode_clips(&self, clips: &[ClipSpec], canvas: Canvas, temp_dir: &Path) -> Result<()> {
        let concat_list_path = temp_dir.join("concat_list.txt");
        fs::write(&concat_list_path, build_concat_list(clips))
            .with_context(|| format!("無法寫入串接列表: {}", concat_list_path.display()))?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress bar template"),
        );
        spinner.set_message(format!(
            "編碼影片中: {}",
            self.settings.output_file.display()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let command = SlideshowCommand::new(
            &concat_list_path,
            canvas,
            self.settings.fps,
            &self.settings.output_file,
        );

        let output = command
            .build_command()
            .output()
            .context("無法執行 ffmpeg 合成影片")?;

        spinner.finish_and_clear();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("ffmpeg 合成失敗: {}", stderr.trim());
        }

        info!("影片編碼完成: {}", self.settings.output_file.display());

        Ok(())
    }

    fn print_summary(&self, summary: &RunSummary) {
        println!();
        println!("{}", style("=== 影片生成摘要 ===").cyan().bold());
        println!("  掃描到: {} 張圖片", summary.enumerated);
        println!("  可用: {} 張", style(summary.converted).green());
        println!("  納入影片: {} 張", summary.selected);

        if summary.output_verified {
            println!(
                "  {} 輸出: {}",
                style("✓").green(),
                self.settings.output_file.display()
            );
        } else {
            println!("  {} 輸出檔案驗證失敗", style("✗").red());
        }

        info!(
            "影片生成完成 - 掃描: {}, 可用: {}, 納入: {}",
            summary.enumerated, summary.converted, summary.selected
        );
    }
}
