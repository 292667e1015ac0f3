use super::request::OutputSpec;
use super::tool_runner::run_tool;
use crate::error::{GifError, GifResult};
use crate::tools::FrameSequence;
use std::path::PathBuf;
use std::process::Command;

/// 將影格序列編碼為單一動畫檔
pub trait GifEncoder {
    fn encode(&self, frames: &FrameSequence, output: &OutputSpec) -> GifResult<()>;
}

/// 使用 gifski，一次呼叫處理整個序列
#[derive(Debug, Clone)]
pub struct GifskiEncoder {
    program: PathBuf,
}

impl GifskiEncoder {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `-o <output> --width <w> --fps <fps> --quality <q> <frame>...`
    pub fn build_command(&self, frames: &FrameSequence, output: &OutputSpec) -> GifResult<Command> {
        if frames.is_empty() {
            return Err(GifError::EmptyFrameSequence(output.destination.clone()));
        }

        let settings = &output.settings;
        let mut cmd = Command::new(&self.program);
        cmd.arg("-o")
            .arg(&output.destination)
            .arg("--width")
            .arg(settings.width.to_string())
            .arg("--fps")
            .arg(settings.fps.to_string())
            .arg("--quality")
            .arg(settings.quality.to_string())
            .args(frames.frames());
        Ok(cmd)
    }
}

impl GifEncoder for GifskiEncoder {
    fn encode(&self, frames: &FrameSequence, output: &OutputSpec) -> GifResult<()> {
        let cmd = self.build_command(frames, output)?;
        run_tool("gifski", cmd)
    }
}
