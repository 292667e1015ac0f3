use super::duration_guard::{DurationGuard, GuardDecision};
use super::frame_extractor::{ExtractionJob, FfmpegFrameExtractor, FrameExtractor};
use super::gifski_command::{GifEncoder, GifskiEncoder};
use super::report::BatchReport;
use super::request::{ConversionMode, ConversionRequest, OutputSettings};
use crate::config::{Config, FileTypeTable, UserSettings, resolve_output_dir};
use crate::error::{GifError, GifResult};
use crate::prompt::ParameterSource;
use crate::tools::{
    ClassifiedInputs, FfprobeProbe, FrameSequence, MediaProbe, TimeRange, classify_inputs,
    ensure_directory_exists, validate_inputs_exist,
};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// 流程設定（由設定檔解析後注入，不讀取全域狀態）
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub output_dir: PathBuf,
    /// 影格暫存目錄的上層；`None` 使用系統暫存目錄
    pub temp_root: Option<PathBuf>,
    pub max_untrimmed_seconds: f64,
    pub extraction_log_level: String,
    pub show_progress: bool,
}

impl PipelineOptions {
    #[must_use]
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            output_dir: resolve_output_dir(settings),
            temp_root: settings.temp_dir.clone(),
            max_untrimmed_seconds: settings.max_untrimmed_seconds,
            extraction_log_level: settings.extraction_log_level.clone(),
            show_progress: true,
        }
    }
}

/// GIF 轉換流程
///
/// 分類輸入 → 影格資料夾 / 零散圖片 / 影片 三個分支 → 擷取影格 → 編碼 → 命名。
/// 每個項目的錯誤都記錄在 [`BatchReport`]，不會中斷其他項目
pub struct GifMaker {
    file_type_table: FileTypeTable,
    options: PipelineOptions,
    duration_guard: DurationGuard,
    probe: Box<dyn MediaProbe>,
    extractor: Box<dyn FrameExtractor>,
    encoder: Box<dyn GifEncoder>,
    shutdown_signal: Arc<AtomicBool>,
}

impl GifMaker {
    /// 使用設定檔中的 ffprobe / ffmpeg / gifski
    #[must_use]
    pub fn new(config: &Config, options: PipelineOptions, shutdown_signal: Arc<AtomicBool>) -> Self {
        let tools = &config.settings.tools;
        Self::with_tools(
            config.file_type_table.clone(),
            options,
            Box::new(FfprobeProbe::new(&tools.ffprobe)),
            Box::new(FfmpegFrameExtractor::new(&tools.ffmpeg)),
            Box::new(GifskiEncoder::new(&tools.gifski)),
            shutdown_signal,
        )
    }

    #[must_use]
    pub fn with_tools(
        file_type_table: FileTypeTable,
        options: PipelineOptions,
        probe: Box<dyn MediaProbe>,
        extractor: Box<dyn FrameExtractor>,
        encoder: Box<dyn GifEncoder>,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            file_type_table,
            duration_guard: DurationGuard::new(options.max_untrimmed_seconds),
            options,
            probe,
            extractor,
            encoder,
            shutdown_signal,
        }
    }

    pub fn run(&self, paths: &[PathBuf], params: &mut dyn ParameterSource) -> GifResult<BatchReport> {
        validate_inputs_exist(paths)?;

        let inputs = classify_inputs(paths, &self.file_type_table);
        info!(
            "輸入分類 - 影格資料夾: {}, 圖片: {}, 影片: {}, 字幕: {}",
            inputs.frame_folders.len(),
            inputs.images.len(),
            inputs.videos.len(),
            inputs.subtitles.len()
        );

        let mut report = BatchReport::default();
        if inputs.is_empty() {
            println!("{}", style(t!("run.nothing_to_do")).yellow());
            return Ok(report);
        }

        ensure_directory_exists(&self.options.output_dir)?;

        // 詢問中斷時保留已完成的項目，交由呼叫端輸出摘要
        if let Err(e) = self.run_branches(&inputs, params, &mut report) {
            error!("批次中止: {e}");
            report.aborted = Some(e);
        }

        Ok(report)
    }

    fn run_branches(
        &self,
        inputs: &ClassifiedInputs,
        params: &mut dyn ParameterSource,
        report: &mut BatchReport,
    ) -> GifResult<()> {
        self.run_frame_folders(inputs, params, report)?;
        self.run_images(inputs, params, report)?;
        self.run_videos(inputs, params, report)
    }

    fn run_frame_folders(
        &self,
        inputs: &ClassifiedInputs,
        params: &mut dyn ParameterSource,
        report: &mut BatchReport,
    ) -> GifResult<()> {
        if inputs.frame_folders.is_empty() {
            return Ok(());
        }

        info!("影格資料夾: {:?}", inputs.frame_folders);
        let settings = params.output_settings(ConversionMode::FrameFolder)?;

        let requests: Vec<_> = inputs
            .frame_folders
            .iter()
            .map(|folder| {
                ConversionRequest::for_frame_folder(folder, settings, &self.options.output_dir)
            })
            .collect();
        self.process_all(&requests, params, report)
    }

    fn run_images(
        &self,
        inputs: &ClassifiedInputs,
        params: &mut dyn ParameterSource,
        report: &mut BatchReport,
    ) -> GifResult<()> {
        if inputs.images.is_empty() {
            return Ok(());
        }

        let settings = params.output_settings(ConversionMode::ImageSet)?;
        let request =
            ConversionRequest::for_images(&inputs.images, settings, &self.options.output_dir);
        self.process_all(&[request], params, report)
    }

    fn run_videos(
        &self,
        inputs: &ClassifiedInputs,
        params: &mut dyn ParameterSource,
        report: &mut BatchReport,
    ) -> GifResult<()> {
        if inputs.videos.is_empty() {
            return Ok(());
        }

        let settings: OutputSettings = params.output_settings(ConversionMode::Video)?;

        // 多部影片時不詢問剪輯時間
        let range = if inputs.videos.len() == 1 {
            Self::prompt_range(params)?
        } else {
            TimeRange::full()
        };

        let subtitle = inputs.paired_subtitle();
        if let Some(subtitle) = subtitle {
            info!("自動套用字幕: {}", subtitle.display());
        } else if !inputs.subtitles.is_empty() {
            warn!("字幕與影片數量不是一對一，不套用字幕");
        }

        let requests: Vec<_> = inputs
            .videos
            .iter()
            .map(|video| {
                ConversionRequest::for_video(
                    video,
                    range.clone(),
                    subtitle,
                    settings,
                    &self.options.output_dir,
                )
            })
            .collect();
        self.process_all(&requests, params, report)
    }

    fn prompt_range(params: &mut dyn ParameterSource) -> GifResult<TimeRange> {
        let start = params.start_time()?;
        let end = match &start {
            Some(start) => params.end_time(start)?,
            None => None,
        };
        TimeRange::new(start, end)
    }

    fn process_all(
        &self,
        requests: &[ConversionRequest],
        params: &mut dyn ParameterSource,
        report: &mut BatchReport,
    ) -> GifResult<()> {
        for (index, request) in requests.iter().enumerate() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                report.interrupted = true;
                return Ok(());
            }

            let source = request.primary_source();
            println!(
                "\n{} [{}/{}] {}",
                style(t!("run.processing")).cyan(),
                index + 1,
                requests.len(),
                style(source.display()).bold()
            );

            let result = self.process(request);
            match &result {
                Ok(output) => {
                    if report.outputs().any(|previous| previous == output) {
                        warn!("輸出檔案在本批次中被覆寫: {}", output.display());
                        report.overwritten.push(output.clone());
                    }
                    info!("已建立 GIF: {}", output.display());
                    println!("  {} {}", style("✓").green(), output.display());
                }
                Err(e) => {
                    error!("處理失敗 [{}] {}: {e}", request.mode, source.display());
                    println!("  {} {}", style("✗").red(), e);
                    if e.is_blocking_notice() {
                        params.acknowledge(&t!("run.duration_notice", reason = e.to_string()))?;
                    }
                }
            }
            report.record(request.mode, source, result);
        }
        Ok(())
    }

    /// 處理單一轉換請求，成功時回傳輸出檔案路徑
    pub fn process(&self, request: &ConversionRequest) -> GifResult<PathBuf> {
        let frames = match request.mode {
            ConversionMode::FrameFolder => {
                FrameSequence::from_directory(request.primary_source(), &self.file_type_table)?
            }
            ConversionMode::ImageSet => FrameSequence::from_files(request.sources.clone()),
            ConversionMode::Video => return self.process_video(request),
        };
        self.encode(request, &frames)
    }

    fn process_video(&self, request: &ConversionRequest) -> GifResult<PathBuf> {
        let video = request.primary_source();

        if let GuardDecision::WithinLimit { duration } =
            self.duration_guard
                .check(self.probe.as_ref(), video, &request.range)?
        {
            println!("  {}", t!("run.duration", seconds = format!("{duration:.2}")));
        }

        // 暫存目錄在成功或失敗後都會刪除
        let temp_dir = self.create_temp_dir()?;
        let result = self.extract_and_encode(request, temp_dir.path());

        let temp_path = temp_dir.path().to_path_buf();
        if let Err(e) = temp_dir.close() {
            warn!("無法清理暫存目錄 {}: {e}", temp_path.display());
        }

        result
    }

    fn extract_and_encode(&self, request: &ConversionRequest, temp_dir: &Path) -> GifResult<PathBuf> {
        let video = request.primary_source();
        let job = ExtractionJob {
            video: video.to_path_buf(),
            fps: request.output.settings.fps,
            destination: temp_dir.to_path_buf(),
            range: request.range.clone(),
            subtitle: request.subtitle.clone(),
            log_level: self.options.extraction_log_level.clone(),
        };

        let spinner = self.spinner(t!("run.extracting").to_string());
        let extracted = self.extractor.extract(&job);
        spinner.finish_and_clear();
        extracted?;

        let frames = FrameSequence::from_directory(temp_dir, &self.file_type_table)?;
        if frames.is_empty() {
            return Err(GifError::EmptyFrameSequence(video.to_path_buf()));
        }
        info!("擷取了 {} 張影格: {}", frames.len(), video.display());

        self.encode(request, &frames)
    }

    fn encode(&self, request: &ConversionRequest, frames: &FrameSequence) -> GifResult<PathBuf> {
        if frames.is_empty() {
            return Err(GifError::EmptyFrameSequence(
                request.primary_source().to_path_buf(),
            ));
        }

        let spinner = self.spinner(t!("run.encoding", count = frames.len()).to_string());
        let encoded = self.encoder.encode(frames, &request.output);
        spinner.finish_and_clear();
        encoded?;

        Ok(request.output.destination.clone())
    }

    fn create_temp_dir(&self) -> GifResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("gif_maker_frames_");

        match &self.options.temp_root {
            Some(root) => {
                ensure_directory_exists(root)?;
                builder.tempdir_in(root).map_err(|e| GifError::io(root, e))
            }
            None => builder
                .tempdir()
                .map_err(|e| GifError::io(std::env::temp_dir(), e)),
        }
    }

    fn spinner(&self, message: String) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress bar template"),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}
