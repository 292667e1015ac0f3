//! 轉檔流程的錯誤類型
//!
//! 函式庫層統一回傳 [`GifError`]，應用層（`main.rs`）再以 `anyhow` 包裝

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GifError {
    /// 時間碼不是 `hh:mm:ss:fff` 四段格式
    #[error("時間格式錯誤（需要 hh:mm:ss:fff）: {0}")]
    InvalidTimeFormat(String),

    #[error("時間範圍無效: {0}")]
    InvalidTimeRange(String),

    #[error("{name} 超出範圍 {min}-{max}: {value}")]
    InvalidOutputSetting {
        name: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("無法讀取影片資訊 {}: {reason}", path.display())]
    ProbeError { path: PathBuf, reason: String },

    #[error(
        "影片長度 {duration:.2} 秒超過未剪輯上限 {limit:.2} 秒: {}",
        path.display()
    )]
    DurationExceeded {
        path: PathBuf,
        duration: f64,
        limit: f64,
    },

    #[error("沒有可編碼的影格: {}", .0.display())]
    EmptyFrameSequence(PathBuf),

    #[error("{tool} 執行失敗（{status}）: {stderr}")]
    ToolInvocationFailure {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("無法執行 {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("找不到外部工具: {0}")]
    ToolNotFound(String),

    #[error("沒有提供任何檔案或資料夾")]
    NoInputs,

    #[error("路徑不存在: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("檔案操作失敗 {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("輸入互動失敗: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl GifError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 使用者需要確認的阻斷性錯誤
    #[must_use]
    pub const fn is_blocking_notice(&self) -> bool {
        matches!(self, Self::DurationExceeded { .. })
    }
}

pub type GifResult<T> = std::result::Result<T, GifError>;
