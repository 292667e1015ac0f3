//! GIF 製作元件
//!
//! 將影格資料夾、零散圖片或影片轉換為 GIF。
//! 影片先以 ffmpeg 擷取影格到暫存目錄，再交給 gifski 編碼

mod duration_guard;
mod frame_extractor;
mod gifski_command;
mod main;
mod report;
mod request;
mod tool_runner;

pub use duration_guard::{DEFAULT_MAX_UNTRIMMED_SECONDS, DurationGuard, GuardDecision};
pub use frame_extractor::{
    EXTRACTION_WIDTH, ExtractionJob, FRAME_FILE_PATTERN, FfmpegFrameExtractor, FrameExtractor,
    escape_filter_path,
};
pub use gifski_command::{GifEncoder, GifskiEncoder};
pub use main::{GifMaker, PipelineOptions};
pub use report::{BatchReport, ItemOutcome};
pub use request::{
    ConversionMode, ConversionRequest, GENERIC_OUTPUT_NAME, OutputSettings, OutputSpec,
    folder_output_name, video_output_name,
};
