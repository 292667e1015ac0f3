use crate::error::{GifError, GifResult};
use crate::tools::TimeRange;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// 零散圖片輸出的固定檔名
pub const GENERIC_OUTPUT_NAME: &str = "output.gif";
const FALLBACK_STEM: &str = "output";

/// 處理分支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    FrameFolder,
    ImageSet,
    Video,
}

impl ConversionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrameFolder => "frame-folder",
            Self::ImageSet => "image-set",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// gifski 的輸出參數，同一批次的同一分支共用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub width: u32,
    pub fps: u32,
    pub quality: u32,
}

impl OutputSettings {
    pub const WIDTH_RANGE: RangeInclusive<u32> = 50..=3840;
    pub const FPS_RANGE: RangeInclusive<u32> = 5..=60;
    pub const QUALITY_RANGE: RangeInclusive<u32> = 1..=100;

    pub fn new(width: u32, fps: u32, quality: u32) -> GifResult<Self> {
        Ok(Self {
            width: check_range("width", width, &Self::WIDTH_RANGE)?,
            fps: check_range("fps", fps, &Self::FPS_RANGE)?,
            quality: check_range("quality", quality, &Self::QUALITY_RANGE)?,
        })
    }
}

fn check_range(name: &'static str, value: u32, range: &RangeInclusive<u32>) -> GifResult<u32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(GifError::InvalidOutputSetting {
            name,
            value: value.to_string(),
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// 輸出參數加上輸出檔案路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub settings: OutputSettings,
    pub destination: PathBuf,
}

/// 一個待處理的轉換單位
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub mode: ConversionMode,
    pub sources: Vec<PathBuf>,
    pub range: TimeRange,
    pub subtitle: Option<PathBuf>,
    pub output: OutputSpec,
}

impl ConversionRequest {
    #[must_use]
    pub fn for_frame_folder(folder: &Path, settings: OutputSettings, output_dir: &Path) -> Self {
        Self {
            mode: ConversionMode::FrameFolder,
            sources: vec![folder.to_path_buf()],
            range: TimeRange::full(),
            subtitle: None,
            output: OutputSpec {
                settings,
                destination: output_dir.join(folder_output_name(folder)),
            },
        }
    }

    #[must_use]
    pub fn for_images(images: &[PathBuf], settings: OutputSettings, output_dir: &Path) -> Self {
        Self {
            mode: ConversionMode::ImageSet,
            sources: images.to_vec(),
            range: TimeRange::full(),
            subtitle: None,
            output: OutputSpec {
                settings,
                destination: output_dir.join(GENERIC_OUTPUT_NAME),
            },
        }
    }

    #[must_use]
    pub fn for_video(
        video: &Path,
        range: TimeRange,
        subtitle: Option<&Path>,
        settings: OutputSettings,
        output_dir: &Path,
    ) -> Self {
        let destination = output_dir.join(video_output_name(video, &range));
        Self {
            mode: ConversionMode::Video,
            sources: vec![video.to_path_buf()],
            range,
            subtitle: subtitle.map(Path::to_path_buf),
            output: OutputSpec {
                settings,
                destination,
            },
        }
    }

    /// 用於訊息顯示的主要來源
    #[must_use]
    pub fn primary_source(&self) -> &Path {
        self.sources
            .first()
            .map_or_else(|| Path::new(""), PathBuf::as_path)
    }
}

/// 影格資料夾輸出為 `<資料夾名稱>.gif`
#[must_use]
pub fn folder_output_name(folder: &Path) -> String {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            folder
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    format!("{name}.gif")
}

/// 影片輸出為 `<檔名>.gif`，有剪輯時為 `<檔名> - <時間碼>.gif`
#[must_use]
pub fn video_output_name(video: &Path, range: &TimeRange) -> String {
    let stem = video
        .file_stem()
        .map_or_else(|| FALLBACK_STEM.to_string(), |s| s.to_string_lossy().to_string());

    match range.filename_fragment() {
        Some(fragment) => format!("{stem} - {fragment}.gif"),
        None => format!("{stem}.gif"),
    }
}
