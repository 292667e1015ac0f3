use anyhow::{Context, Result};
use clap::Parser;
use console::{Term, style};
use gif_maker::cli::Cli;
use gif_maker::component::GifMaker;
use gif_maker::component::gif_maker::PipelineOptions;
use gif_maker::config::save::save_settings;
use gif_maker::config::{Config, SETTINGS_FILE_NAME};
use gif_maker::prompt::{FixedParameters, InteractiveParameters, ParameterSource};
use gif_maker::signal::setup_shutdown_signal;
use gif_maker::tools::check_required_tools;
use gif_maker::{init, pause};
use log::{error, info};
use rust_i18n::t;
use std::path::Path;
use std::process::ExitCode;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init(cli.verbose);
    let term = Term::stdout();

    let result = run(&cli);
    if let Err(e) = &result {
        error!("Program error: {e:#}");
        eprintln!("{} {e:#}", style(t!("main.error_prefix")).red().bold());
    }

    // 拖放啟動的主控台視窗不要立刻關閉
    if cli.is_interactive() {
        let _ = pause(&term);
    }

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) | Err(_) => ExitCode::FAILURE,
    }
}

/// 回傳是否所有項目都成功
fn run(cli: &Cli) -> Result<bool> {
    let shutdown_signal = setup_shutdown_signal().context("無法設定 Ctrl-C 處理器")?;

    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    if let Some(output_dir) = &cli.output_dir {
        config.settings.output_dir = Some(output_dir.clone());
    }

    if cli.write_settings {
        if let Some(width) = cli.width {
            config.settings.output.width = width;
        }
        if let Some(fps) = cli.fps {
            config.settings.output.fps = fps;
        }
        if let Some(quality) = cli.quality {
            config.settings.output.quality = quality;
        }
        save_settings(&config.settings, Path::new(SETTINGS_FILE_NAME))?;
        println!("{}", style(t!("main.settings_saved", path = SETTINGS_FILE_NAME)).green());
    }

    check_required_tools(&config.settings.tools).context(t!("main.install_tools").to_string())?;

    let mut params: Box<dyn ParameterSource> = if cli.is_interactive() {
        Box::new(InteractiveParameters::new(config.settings.output))
    } else {
        let settings = cli.output_settings(&config.settings.output)?;
        Box::new(FixedParameters::new(settings).with_range(cli.time_range()?))
    };

    let options = PipelineOptions::from_settings(&config.settings);
    info!("輸出目錄: {}", options.output_dir.display());
    println!(
        "{} {}",
        style(t!("main.output_dir")).cyan(),
        options.output_dir.display()
    );

    let gif_maker = GifMaker::new(&config, options, shutdown_signal);
    let report = gif_maker.run(&cli.paths, params.as_mut())?;
    report.print_summary();

    Ok(report.is_success())
}
