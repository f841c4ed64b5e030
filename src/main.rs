use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::Calculator;
use zcalc::config::{AppearanceMode, load_config};
use zcalc::display::DisplayText;
use zcalc::input::{Key, action_for_key, dispatch};
use zcalc::ui;

/// A small desktop calculator with memory and history
#[derive(Parser)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured appearance
    #[arg(long, value_enum)]
    appearance: Option<AppearanceMode>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Type keys into a calculator without opening a window and print the display
    Press {
        /// Keys to press, using the keyboard mapping (e.g. "5+3=")
        keys: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Feed `keys` through the keyboard mapping and return the resulting display.
fn press_keys(keys: &str) -> DisplayText {
    let mut calculator = Calculator::new();
    let mut error = None;

    for c in keys.chars() {
        if let Some(action) = action_for_key(Key::from_char(c)) {
            error = dispatch(&mut calculator, action).err();
        } else {
            tracing::debug!(key = ?c, "Ignoring unmapped key");
        }
    }

    DisplayText::from_calculator(&calculator, error.as_ref())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Command::Press { keys }) = cli.command {
        let text = press_keys(&keys);
        println!("{}", text.annotation);
        println!("{}", text.primary);
        return Ok(());
    }

    let mut config = load_config(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(appearance) = cli.appearance {
        config.appearance = appearance;
    }

    gpui::Application::new().run(move |cx: &mut gpui::App| {
        if let Err(e) = ui::open_calculator(&config, cx) {
            tracing::error!("Failed to open calculator window: {e:#}");
            cx.quit();
        }
    });

    Ok(())
}
