//! 命令列參數
//!
//! 主要用法是把檔案或資料夾拖放到執行檔上，因此路徑以位置參數傳入

use crate::component::gif_maker::OutputSettings;
use crate::config::OutputDefaults;
use crate::error::GifResult;
use crate::tools::{TimeRange, Timecode};
use clap::Parser;
use std::path::PathBuf;

/// Convert frame folders, loose PNG images and short videos into GIFs
#[derive(Debug, Parser)]
#[command(name = "gif_maker")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Files or folders to convert
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(50..=3840))]
    pub width: Option<u32>,

    /// Output frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(5..=60))]
    pub fps: Option<u32>,

    /// Encoding quality
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub quality: Option<u32>,

    /// Trim start (hh:mm:ss:fff), only used for a single video
    #[arg(long)]
    pub start: Option<Timecode>,

    /// Trim end (hh:mm:ss:fff)
    #[arg(long, requires = "start")]
    pub end: Option<Timecode>,

    /// Output directory (defaults to the desktop)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Use defaults and presets without prompting
    #[arg(short = 'y', long)]
    pub non_interactive: bool,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the effective settings to settings.json
    #[arg(long)]
    pub write_settings: bool,
}

impl Cli {
    /// 有任何預設值時不再互動詢問
    #[must_use]
    pub const fn has_presets(&self) -> bool {
        self.width.is_some()
            || self.fps.is_some()
            || self.quality.is_some()
            || self.start.is_some()
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        !self.non_interactive && !self.has_presets()
    }

    pub fn time_range(&self) -> GifResult<TimeRange> {
        TimeRange::new(self.start.clone(), self.end.clone())
    }

    /// 未指定的值使用設定檔的預設值
    pub fn output_settings(&self, defaults: &OutputDefaults) -> GifResult<OutputSettings> {
        OutputSettings::new(
            self.width.unwrap_or(defaults.width),
            self.fps.unwrap_or(defaults.fps),
            self.quality.unwrap_or(defaults.quality),
        )
    }
}
