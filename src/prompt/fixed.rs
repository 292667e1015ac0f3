use super::ParameterSource;
use crate::component::gif_maker::{ConversionMode, OutputSettings};
use crate::error::GifResult;
use crate::tools::{TimeRange, Timecode};
use log::warn;

/// 預先決定的參數，不與使用者互動
#[derive(Debug, Clone)]
pub struct FixedParameters {
    settings: OutputSettings,
    range: TimeRange,
    settings_requests: Vec<ConversionMode>,
    time_requests: usize,
    notices: Vec<String>,
}

impl FixedParameters {
    #[must_use]
    pub const fn new(settings: OutputSettings) -> Self {
        Self {
            settings,
            range: TimeRange::full(),
            settings_requests: Vec::new(),
            time_requests: 0,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    /// 依序記錄被詢問輸出參數的分支
    #[must_use]
    pub fn settings_requests(&self) -> &[ConversionMode] {
        &self.settings_requests
    }

    /// 被詢問開始時間的次數
    #[must_use]
    pub const fn time_requests(&self) -> usize {
        self.time_requests
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl ParameterSource for FixedParameters {
    fn output_settings(&mut self, mode: ConversionMode) -> GifResult<OutputSettings> {
        self.settings_requests.push(mode);
        Ok(self.settings)
    }

    fn start_time(&mut self) -> GifResult<Option<Timecode>> {
        self.time_requests += 1;
        Ok(self.range.start().cloned())
    }

    fn end_time(&mut self, _start: &Timecode) -> GifResult<Option<Timecode>> {
        Ok(self.range.end().cloned())
    }

    fn acknowledge(&mut self, notice: &str) -> GifResult<()> {
        warn!("{notice}");
        self.notices.push(notice.to_string());
        Ok(())
    }
}
