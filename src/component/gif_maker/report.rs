use super::request::ConversionMode;
use crate::error::GifError;
use console::style;
use log::info;
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 單一項目的處理結果
#[derive(Debug)]
pub struct ItemOutcome {
    pub mode: ConversionMode,
    pub source: PathBuf,
    pub result: Result<PathBuf, GifError>,
}

/// 整個批次的處理結果
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
    /// 收到中斷訊號而提前結束
    pub interrupted: bool,
    /// 詢問參數失敗，之後的分支沒有執行
    pub aborted: Option<GifError>,
    /// 同一批次中被後續項目覆寫的輸出檔案
    pub overwritten: Vec<PathBuf>,
}

impl BatchReport {
    pub fn record(&mut self, mode: ConversionMode, source: &Path, result: Result<PathBuf, GifError>) {
        self.outcomes.push(ItemOutcome {
            mode,
            source: source.to_path_buf(),
            result,
        });
    }

    #[must_use]
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.successful()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && !self.interrupted && self.aborted.is_none()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ItemOutcome, &GifError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }

    pub fn print_summary(&self) {
        println!();
        println!("{}", style(t!("summary.title")).cyan().bold());
        println!("  {}", t!("summary.total", count = self.outcomes.len()));
        println!(
            "  {}",
            style(t!("summary.succeeded", count = self.successful())).green()
        );

        if self.failed() > 0 {
            println!("  {}", style(t!("summary.failed", count = self.failed())).red());
            for (outcome, error) in self.failures() {
                println!(
                    "    {} [{}] {}: {}",
                    style("✗").red(),
                    outcome.mode,
                    outcome.source.display(),
                    error
                );
            }
        }

        if self.interrupted {
            println!("  {}", style(t!("summary.interrupted")).yellow());
        }

        for path in &self.overwritten {
            println!(
                "  {}",
                style(t!("summary.overwritten", path = path.display().to_string())).yellow()
            );
        }

        if let Some(error) = &self.aborted {
            println!(
                "  {}",
                style(t!("summary.aborted", reason = error.to_string())).red()
            );
        }

        info!(
            "GIF 轉換完成 - 成功: {}, 失敗: {}",
            self.successful(),
            self.failed()
        );
    }
}
