use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use dailyvocab::app::{self, App};
use dailyvocab::config::AppConfig;
use dailyvocab::event::{CrosstermInput, EventListener};
use dailyvocab::logging;
use dailyvocab::terminal::TerminalGuard;
use dailyvocab::ui::theme::Theme;
use dailyvocab::vocabulary::{Vocabulary, WORD_LIST_FILE_NAME};

#[derive(Parser)]
#[command(
    name = "dailyvocab",
    version,
    about = "Terminal dashboard presenting a word of the day in different languages"
)]
struct Cli {
    #[arg(long, help = "Configuration file (default: ~/.dailyvocab)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Word list file (default: ./wordlist.json)")]
    words: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Log file location")]
    log_file: Option<PathBuf>,

    #[arg(short, long, help = "Log debug detail")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(err) = logging::init(&log_path, cli.verbose) {
        eprintln!("warning: logging disabled: {err:#}");
    }
    log::info!("dailyvocab starting");

    let mut guard =
        logging::log_failure(TerminalGuard::acquire().context("initializing terminal"))?;
    let result = logging::log_failure(run(&cli, &mut guard));
    let restored = guard.restore();
    result?;
    restored.context("restoring terminal")?;
    log::info!("dailyvocab exiting");
    Ok(())
}

fn run(cli: &Cli, guard: &mut TerminalGuard) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_or_create(&config_path).context("loading configuration")?;

    let words_path = cli
        .words
        .clone()
        .unwrap_or_else(|| PathBuf::from(WORD_LIST_FILE_NAME));
    let vocabulary = Vocabulary::load_file(&words_path).context("loading word list")?;

    let theme = match cli.theme.as_deref() {
        Some(name) => Theme::load(name).unwrap_or_else(|| {
            log::warn!(
                "unknown theme {name}; using the default (available: {})",
                Theme::available_themes().join(", ")
            );
            Theme::default()
        }),
        None => Theme::default(),
    };

    let terminal = guard.terminal_mut();
    let size = terminal.size().context("querying terminal size")?;
    let today = Local::now().date_naive();
    let mut app = App::new(config, vocabulary, theme, (size.width, size.height), today)
        .with_config_path(config_path);

    let mut listener = EventListener::new(CrosstermInput);
    App::register_keypress_handlers(&mut listener);

    app::run(terminal, &mut app, &mut listener)
}
