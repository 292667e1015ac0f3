use super::tool_runner::run_tool;
use crate::error::GifResult;
use crate::tools::{TimeRange, ensure_directory_exists};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 擷取影格的固定寬度（等比例縮放）
pub const EXTRACTION_WIDTH: u32 = 720;
/// 影格檔名格式：`frame_0001.png`、`frame_0002.png`...
pub const FRAME_FILE_PATTERN: &str = "frame_%04d.png";

/// 將影片拆成依序編號的影格檔案
pub trait FrameExtractor {
    fn extract(&self, job: &ExtractionJob) -> GifResult<()>;
}

/// 單一影片的影格擷取參數
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    pub video: PathBuf,
    pub fps: u32,
    pub destination: PathBuf,
    pub range: TimeRange,
    pub subtitle: Option<PathBuf>,
    pub log_level: String,
}

impl ExtractionJob {
    /// 字幕燒錄必須在重新取樣前，字幕時間才會對齊原始時間軸
    #[must_use]
    pub fn filter_chain(&self) -> String {
        let mut filters = Vec::with_capacity(3);
        if let Some(subtitle) = &self.subtitle {
            filters.push(format!("subtitles={}", escape_filter_path(subtitle)));
        }
        filters.push(format!("fps={}", self.fps));
        filters.push(format!("scale={EXTRACTION_WIDTH}:-1:flags=lanczos"));
        filters.join(",")
    }

    #[must_use]
    pub fn output_pattern(&self) -> PathBuf {
        self.destination.join(FRAME_FILE_PATTERN)
    }

    /// `-loglevel <level> -i <video> [-ss <start> -copyts] [-to <end>] -vf <filters> <pattern>`
    #[must_use]
    pub fn build_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-loglevel".into(),
            self.log_level.as_str().into(),
            "-i".into(),
            self.video.as_os_str().to_owned(),
        ];

        // -copyts 讓 -to 以原始影片時間計算，而非 seek 後的時間
        if let Some(start) = self.range.start() {
            args.push("-ss".into());
            args.push(start.to_tool_format().into());
            args.push("-copyts".into());
        }
        if let Some(end) = self.range.end() {
            args.push("-to".into());
            args.push(end.to_tool_format().into());
        }

        args.push("-vf".into());
        args.push(self.filter_chain().into());
        args.push(self.output_pattern().into_os_string());
        args
    }
}

/// 轉義 filter graph 中的路徑
///
/// ffmpeg 會解析兩次：先是 filter graph，再是 filter 選項值，因此兩層都要轉義。
/// Windows 的反斜線先換成 `/`
#[must_use]
pub fn escape_filter_path(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let option_level = escape_chars(&normalized, &['\\', '\'', ':', '=']);
    escape_chars(&option_level, &['\\', '\'', '[', ']', ',', ';'])
}

fn escape_chars(value: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 使用 ffmpeg 擷取影格
#[derive(Debug, Clone)]
pub struct FfmpegFrameExtractor {
    program: PathBuf,
}

impl FfmpegFrameExtractor {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn build_command(&self, job: &ExtractionJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(job.build_args());
        cmd
    }
}

impl FrameExtractor for FfmpegFrameExtractor {
    fn extract(&self, job: &ExtractionJob) -> GifResult<()> {
        ensure_directory_exists(&job.destination)?;
        run_tool("ffmpeg", self.build_command(job))
    }
}
