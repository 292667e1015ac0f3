use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 輸入檔案的分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Video,
    Subtitle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
    #[serde(rename = "SUBTITLE_FILE")]
    pub subtitle_file: Vec<String>,
}

impl FileTypeTable {
    fn extensions_set(extensions: &[String]) -> HashSet<String> {
        extensions.iter().map(|ext| ext.to_lowercase()).collect()
    }

    fn matches(extensions: &[String], path: &Path) -> bool {
        let set = Self::extensions_set(extensions);
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| set.contains(&format!(".{}", ext.to_lowercase())))
    }

    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        Self::matches(&self.image_file, path)
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        Self::matches(&self.video_file, path)
    }

    #[must_use]
    pub fn is_subtitle_file(&self, path: &Path) -> bool {
        Self::matches(&self.subtitle_file, path)
    }

    /// 依副檔名分類（不分大小寫），其他副檔名回傳 `None`
    #[must_use]
    pub fn categorize_file(&self, path: &Path) -> Option<FileCategory> {
        if self.is_image_file(path) {
            Some(FileCategory::Image)
        } else if self.is_video_file(path) {
            Some(FileCategory::Video)
        } else if self.is_subtitle_file(path) {
            Some(FileCategory::Subtitle)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 提示留空時使用的輸出參數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDefaults {
    pub width: u32,
    pub fps: u32,
    pub quality: u32,
}

impl Default for OutputDefaults {
    fn default() -> Self {
        Self {
            width: 512,
            fps: 12,
            quality: 100,
        }
    }
}

/// 外部工具的執行檔路徑（名稱則從 PATH 尋找）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub gifski: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            gifski: PathBuf::from("gifski"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub output: OutputDefaults,
    pub tools: ToolPaths,
    /// 未設定時輸出到桌面
    pub output_dir: Option<PathBuf>,
    /// 影格暫存目錄的上層；未設定時使用系統暫存目錄
    pub temp_dir: Option<PathBuf>,
    pub max_untrimmed_seconds: f64,
    pub extraction_log_level: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            output: OutputDefaults::default(),
            tools: ToolPaths::default(),
            output_dir: None,
            temp_dir: None,
            max_untrimmed_seconds: 15.0,
            extraction_log_level: "warning".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}
