use crate::error::{GifError, GifResult};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub duration_seconds: f64,
}

/// 影片資訊來源
pub trait MediaProbe {
    fn probe(&self, video: &Path) -> GifResult<VideoInfo>;
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
}

/// 使用 ffprobe 取得影片資訊
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    program: PathBuf,
}

impl FfprobeProbe {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn build_command(&self, video: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-i").arg(video).args([
            "-show_format",
            "-show_streams",
            "-v",
            "quiet",
            "-print_format",
            "json",
        ]);
        cmd
    }
}

impl MediaProbe for FfprobeProbe {
    fn probe(&self, video: &Path) -> GifResult<VideoInfo> {
        let mut cmd = self.build_command(video);
        debug!("執行 ffprobe: {cmd:?}");

        let output = cmd.output().map_err(|e| GifError::ProbeError {
            path: video.to_path_buf(),
            reason: format!("無法執行 ffprobe: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GifError::ProbeError {
                path: video.to_path_buf(),
                reason: format!("ffprobe 執行失敗（{}）: {}", output.status, stderr.trim()),
            });
        }

        parse_probe_output(video, &String::from_utf8_lossy(&output.stdout))
    }
}

/// 解析 ffprobe 的 JSON 輸出；`format.duration` 為必要欄位
pub fn parse_probe_output(video: &Path, json: &str) -> GifResult<VideoInfo> {
    let probe_error = |reason: &str| GifError::ProbeError {
        path: video.to_path_buf(),
        reason: reason.to_string(),
    };

    let probe: FfprobeOutput =
        serde_json::from_str(json).map_err(|e| probe_error(&format!("無法解析 ffprobe 輸出: {e}")))?;

    let duration_seconds = probe
        .format
        .as_ref()
        .and_then(|f| f.duration.as_deref())
        .ok_or_else(|| probe_error("缺少 format.duration"))?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| probe_error("format.duration 不是有效的秒數"))?;

    Ok(VideoInfo { duration_seconds })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "streams": [
            {"codec_type": "audio"},
            {"codec_type": "video", "width": 1920, "height": 1080, "r_frame_rate": "30000/1001"}
        ],
        "format": {"duration": "20.000000"}
    }"#;

    #[test]
    fn test_parse_probe_output() {
        let info = parse_probe_output(Path::new("a.mp4"), SAMPLE).unwrap();
        assert!((info.duration_seconds - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_probe_output_missing_duration() {
        let result = parse_probe_output(Path::new("a.mp4"), r#"{"format": {}}"#);
        assert!(matches!(result, Err(GifError::ProbeError { .. })));
    }

    #[test]
    fn test_parse_probe_output_bad_duration() {
        let result = parse_probe_output(Path::new("a.mp4"), r#"{"format": {"duration": "N/A"}}"#);
        assert!(matches!(result, Err(GifError::ProbeError { .. })));
    }

    #[test]
    fn test_parse_probe_output_not_json() {
        let result = parse_probe_output(Path::new("a.mp4"), "");
        assert!(matches!(result, Err(GifError::ProbeError { .. })));
    }

    #[test]
    fn test_build_command_args() {
        let cmd = FfprobeProbe::new("ffprobe").build_command(Path::new("clip.mp4"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(
            args,
            vec![
                "-i",
                "clip.mp4",
                "-show_format",
                "-show_streams",
                "-v",
                "quiet",
                "-print_format",
                "json"
            ]
        );
    }
}
