use super::ParameterSource;
use crate::component::gif_maker::{ConversionMode, OutputSettings};
use crate::config::OutputDefaults;
use crate::error::{GifError, GifResult};
use crate::tools::{Timecode, validate_timecode};
use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;
use std::ops::RangeInclusive;

/// 在終端機詢問使用者；留空使用預設值
pub struct InteractiveParameters {
    defaults: OutputDefaults,
    term: Term,
}

impl InteractiveParameters {
    #[must_use]
    pub fn new(defaults: OutputDefaults) -> Self {
        Self {
            defaults,
            term: Term::stderr(),
        }
    }

    fn prompt_number(&self, prompt: &str, range: RangeInclusive<u32>, default: u32) -> GifResult<u32> {
        let (min, max) = (*range.start(), *range.end());
        let value = Input::<u32>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .validate_with(move |value: &u32| -> Result<(), String> {
                if range.contains(value) {
                    Ok(())
                } else {
                    Err(t!("prompt.out_of_range", min = min, max = max).to_string())
                }
            })
            .interact_text_on(&self.term)?;
        Ok(value)
    }

    /// 留空回傳 `None`；格式錯誤會重新詢問
    fn prompt_timecode(&self, prompt: &str, after: Option<&Timecode>) -> GifResult<Option<Timecode>> {
        let after_millis = after.map(Timecode::as_millis);
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(move |input: &String| -> Result<(), String> {
                let input = input.trim();
                if input.is_empty() {
                    return Ok(());
                }
                if !validate_timecode(input) {
                    return Err(t!("prompt.invalid_time").to_string());
                }
                match (Timecode::parse(input), after_millis) {
                    (Ok(tc), Some(start)) if tc.as_millis() <= start => {
                        Err(t!("prompt.end_before_start").to_string())
                    }
                    _ => Ok(()),
                }
            })
            .interact_text_on(&self.term)?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        Timecode::parse(input).map(Some)
    }
}

impl ParameterSource for InteractiveParameters {
    fn output_settings(&mut self, mode: ConversionMode) -> GifResult<OutputSettings> {
        let title = match mode {
            ConversionMode::FrameFolder => t!("prompt.title_frame_folder"),
            ConversionMode::ImageSet => t!("prompt.title_image_set"),
            ConversionMode::Video => t!("prompt.title_video"),
        };
        println!("\n{}", style(title).cyan().bold());

        let width = self.prompt_number(
            &t!("prompt.width"),
            OutputSettings::WIDTH_RANGE,
            self.defaults.width,
        )?;
        let fps = self.prompt_number(
            &t!("prompt.fps"),
            OutputSettings::FPS_RANGE,
            self.defaults.fps,
        )?;
        let quality = self.prompt_number(
            &t!("prompt.quality"),
            OutputSettings::QUALITY_RANGE,
            self.defaults.quality,
        )?;

        OutputSettings::new(width, fps, quality)
    }

    fn start_time(&mut self) -> GifResult<Option<Timecode>> {
        self.prompt_timecode(&t!("prompt.start_time"), None)
    }

    fn end_time(&mut self, start: &Timecode) -> GifResult<Option<Timecode>> {
        self.prompt_timecode(&t!("prompt.end_time"), Some(start))
    }

    fn acknowledge(&mut self, notice: &str) -> GifResult<()> {
        println!("\n{}", style(notice).red().bold());
        println!("{}", style(t!("prompt.acknowledge")).dim());
        self.term
            .read_line()
            .map_err(|e| GifError::Prompt(dialoguer::Error::IO(e)))?;
        Ok(())
    }
}
