// LogTranslator - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use logtranslator::app;
pub use logtranslator::platform;
pub use logtranslator::ui;
pub use logtranslator::util;

use clap::Parser;
use std::path::PathBuf;

/// Log Translator - paste a log and get its failure keywords called out.
#[derive(Parser, Debug)]
#[command(name = "LogTranslator", version, about)]
struct Cli {
    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Simulated translation delay in milliseconds (overrides config.toml).
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config comes first so its [logging] section can shape the subscriber.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (mut config, mut config_warnings) = platform::config::load_config(&config_dir);

    if let Some(ms) = cli.delay_ms {
        match platform::config::validate_delay_ms(ms) {
            Ok(delay) => config.translation_delay = delay,
            Err(e) => config_warnings.push(format!("--delay-ms: {e}. Ignored.")),
        }
    }

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        delay_ms = config.translation_delay.as_millis() as u64,
        "LogTranslator starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let mut page = match app::page::TranslatorPage::with_keyword_translator(
        config.translation_delay,
    ) {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build translator");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    // Surface the first config problem where the user will see it.
    if let Some(first) = config_warnings.first() {
        page.state.status_message = format!("Config warning: {first}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::LogTranslatorApp::new(page, dark_mode)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogTranslator GUI: {e}");
        std::process::exit(1);
    }
}
