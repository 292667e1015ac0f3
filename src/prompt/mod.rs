//! 輸出參數與剪輯時間的取得方式
//!
//! 互動模式使用 dialoguer 詢問使用者；固定模式用於命令列參數與測試

mod fixed;
mod interactive;

pub use fixed::FixedParameters;
pub use interactive::InteractiveParameters;

use crate::component::gif_maker::{ConversionMode, OutputSettings};
use crate::error::GifResult;
use crate::tools::Timecode;

/// 流程在固定時間點呼叫（每個分支一次，而非每個項目一次）
pub trait ParameterSource {
    fn output_settings(&mut self, mode: ConversionMode) -> GifResult<OutputSettings>;

    /// `None` 代表不剪輯
    fn start_time(&mut self) -> GifResult<Option<Timecode>>;

    /// 只有在設定了開始時間後才會詢問；`None` 代表剪到影片結尾
    fn end_time(&mut self, start: &Timecode) -> GifResult<Option<Timecode>>;

    /// 顯示阻斷性通知並等待使用者確認
    fn acknowledge(&mut self, notice: &str) -> GifResult<()>;
}
