use crate::error::{GifError, GifResult};
use crate::tools::{MediaProbe, TimeRange};
use log::info;
use std::path::Path;

/// 未剪輯影片的長度上限（秒）
pub const DEFAULT_MAX_UNTRIMMED_SECONDS: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuardDecision {
    /// 有設定剪輯範圍，不檢查長度
    Bypassed,
    WithinLimit { duration: f64 },
}

/// 未剪輯的長影片會產生過大的 GIF，超過上限即中止該影片
#[derive(Debug, Clone, Copy)]
pub struct DurationGuard {
    max_seconds: f64,
}

impl Default for DurationGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNTRIMMED_SECONDS)
    }
}

impl DurationGuard {
    #[must_use]
    pub const fn new(max_seconds: f64) -> Self {
        Self { max_seconds }
    }

    #[must_use]
    pub const fn max_seconds(&self) -> f64 {
        self.max_seconds
    }

    /// 有剪輯範圍時直接放行（不查詢長度）；否則長度超過上限回傳 `DurationExceeded`
    pub fn check(
        &self,
        probe: &dyn MediaProbe,
        video: &Path,
        range: &TimeRange,
    ) -> GifResult<GuardDecision> {
        if range.is_trimmed() {
            return Ok(GuardDecision::Bypassed);
        }

        let duration = probe.probe(video)?.duration_seconds;
        info!("影片長度 {duration:.3} 秒: {}", video.display());

        if duration > self.max_seconds {
            return Err(GifError::DurationExceeded {
                path: video.to_path_buf(),
                duration,
                limit: self.max_seconds,
            });
        }

        Ok(GuardDecision::WithinLimit { duration })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Timecode, VideoInfo};
    use std::cell::Cell;

    struct StubProbe {
        duration: Option<f64>,
        calls: Cell<usize>,
    }

    impl StubProbe {
        fn new(duration: Option<f64>) -> Self {
            Self {
                duration,
                calls: Cell::new(0),
            }
        }
    }

    impl MediaProbe for StubProbe {
        fn probe(&self, video: &Path) -> GifResult<VideoInfo> {
            self.calls.set(self.calls.get() + 1);
            self.duration
                .map(|duration_seconds| VideoInfo { duration_seconds })
                .ok_or_else(|| GifError::ProbeError {
                    path: video.to_path_buf(),
                    reason: "stub".to_string(),
                })
        }
    }

    fn trimmed() -> TimeRange {
        TimeRange::new(Some(Timecode::parse("00:00:01:000").unwrap()), None).unwrap()
    }

    #[test]
    fn test_long_untrimmed_video_is_rejected() {
        let probe = StubProbe::new(Some(20.0));
        let result = DurationGuard::default().check(&probe, Path::new("a.mp4"), &TimeRange::full());
        assert!(matches!(
            result,
            Err(GifError::DurationExceeded { duration, limit, .. })
                if (duration - 20.0).abs() < f64::EPSILON && (limit - 15.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_trimmed_video_bypasses_probe() {
        let probe = StubProbe::new(Some(20.0));
        let result = DurationGuard::default().check(&probe, Path::new("a.mp4"), &trimmed());
        assert_eq!(result.unwrap(), GuardDecision::Bypassed);
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let probe = StubProbe::new(Some(15.0));
        let result = DurationGuard::default().check(&probe, Path::new("a.mp4"), &TimeRange::full());
        assert_eq!(result.unwrap(), GuardDecision::WithinLimit { duration: 15.0 });
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn test_probe_failure_propagates() {
        let probe = StubProbe::new(None);
        let result = DurationGuard::default().check(&probe, Path::new("a.mp4"), &TimeRange::full());
        assert!(matches!(result, Err(GifError::ProbeError { .. })));
    }
}
