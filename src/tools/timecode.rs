use crate::error::{GifError, GifResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// 使用者輸入的時間碼格式：`hh:mm:ss:fff`
static TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,3}$").expect("Invalid timecode pattern")
});

/// 檢查是否為四段式時間碼（三段式的 ffmpeg 格式也視為無效）
#[must_use]
pub fn validate_timecode(value: &str) -> bool {
    TIMECODE_PATTERN.is_match(value)
}

/// 將 `hh:mm:ss:fff` 轉成 ffmpeg 使用的 `hh:mm:ss.fff`
///
/// 只替換最後一個冒號；非四段式的字串原樣回傳
#[must_use]
pub fn normalize_timecode(value: &str) -> String {
    if value.split(':').count() == 4 {
        if let Some((head, millis)) = value.rsplit_once(':') {
            return format!("{head}.{millis}");
        }
    }
    value.to_string()
}

/// 移除冒號並以 `-` 連接起訖時間，用於輸出檔名
#[must_use]
pub fn filename_fragment(start: &str, end: Option<&str>) -> String {
    let start_safe = start.replace(':', "");
    match end {
        Some(end) => format!("{start_safe}-{}", end.replace(':', "")),
        None => start_safe,
    }
}

/// 經過驗證的四段式時間碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timecode(String);

impl Timecode {
    pub fn parse(value: &str) -> GifResult<Self> {
        if validate_timecode(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(GifError::InvalidTimeFormat(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ffmpeg `-ss` / `-to` 參數格式
    #[must_use]
    pub fn to_tool_format(&self) -> String {
        normalize_timecode(&self.0)
    }

    /// 換算為毫秒；最後一段視為小數部分（`1:5` 代表 1.5 秒）
    #[must_use]
    pub fn as_millis(&self) -> u64 {
        let parts: Vec<&str> = self.0.split(':').collect();
        let number = |s: &str| s.parse::<u64>().unwrap_or(0);

        let fraction = format!("{:0<3}", parts[3]);
        number(parts[0]) * 3_600_000
            + number(parts[1]) * 60_000
            + number(parts[2]) * 1_000
            + number(&fraction)
    }
}

impl FromStr for Timecode {
    type Err = GifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 剪輯範圍
///
/// 只有 `end` 而沒有 `start` 不是合法的範圍：剪輯一定從起點開始
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRange {
    start: Option<Timecode>,
    end: Option<Timecode>,
}

impl TimeRange {
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn new(start: Option<Timecode>, end: Option<Timecode>) -> GifResult<Self> {
        match (&start, &end) {
            (None, Some(end)) => {
                return Err(GifError::InvalidTimeRange(format!(
                    "設定了結束時間 {end} 但沒有開始時間"
                )));
            }
            (Some(start), Some(end)) if end.as_millis() <= start.as_millis() => {
                return Err(GifError::InvalidTimeRange(format!(
                    "結束時間 {end} 必須晚於開始時間 {start}"
                )));
            }
            _ => {}
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> Option<&Timecode> {
        self.start.as_ref()
    }

    #[must_use]
    pub const fn end(&self) -> Option<&Timecode> {
        self.end.as_ref()
    }

    #[must_use]
    pub const fn is_trimmed(&self) -> bool {
        self.start.is_some()
    }

    /// 有開始時間時才產生檔名片段
    #[must_use]
    pub fn filename_fragment(&self) -> Option<String> {
        let start = self.start.as_ref()?;
        Some(filename_fragment(
            start.as_str(),
            self.end.as_ref().map(Timecode::as_str),
        ))
    }
}
