mod app;
mod editor;
mod preview;
mod schedule;
mod ui;

use std::{
    io::{Read, Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use livemark_config::Config;
use livemark_engine::{HtmlOptions, blocks_to_html, run_cycle, snapshot};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::{App, AppAction, Settings};

/// Live editor and checker for the livemark text format.
#[derive(Debug, Parser)]
#[command(name = "livemark", version, about)]
struct Cli {
    /// Document to open. Falls back to `default_document` from the config.
    file: Option<PathBuf>,

    /// Print diagnostics and exit with status 1 if there are any.
    #[arg(long, conflicts_with_all = ["html", "outline"])]
    check: bool,

    /// Print the document as an HTML fragment.
    #[arg(long, conflicts_with = "outline")]
    html: bool,

    /// Print the element, block and diagnostic outline.
    #[arg(long)]
    outline: bool,

    /// Preview render delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Width for rendered images.
    #[arg(long)]
    image_width: Option<u32>,

    /// Hide the line-number gutter.
    #[arg(long)]
    no_gutter: bool,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(delay) = self.delay_ms {
            config.render_delay_ms = delay;
        }
        if let Some(width) = self.image_width {
            config.image_width = width;
        }
        if self.no_gutter {
            config.show_gutter = false;
        }
    }

    fn interactive(&self) -> bool {
        !(self.check || self.html || self.outline)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    };
    cli.apply_to(&mut config);

    if cli.write_config {
        config.save()?;
        println!("Wrote {}", Config::config_path().display());
        return Ok(());
    }

    let path = cli.file.clone().or_else(|| config.default_document.clone());

    if !cli.interactive() {
        let text = match &path {
            Some(path) => read_document(path)?,
            None => read_stdin()?,
        };
        let code = run_batch(&cli, &config, &text);
        process::exit(code);
    }

    let content = match &path {
        Some(path) if path.exists() => read_document(path)?,
        Some(path) => {
            log::info!("{} does not exist yet; starting empty", path.display());
            String::new()
        }
        None => String::new(),
    };
    let settings = Settings {
        render_delay: config.render_delay(),
        show_gutter: config.show_gutter,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content, path, settings);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Runs one non-interactive mode and returns the process exit code.
fn run_batch(cli: &Cli, config: &Config, text: &str) -> i32 {
    let cycle = run_cycle(text);

    if cli.html {
        let options = HtmlOptions {
            image_width: config.image_width,
        };
        print!("{}", blocks_to_html(&cycle.blocks, &options));
        return 0;
    }
    if cli.outline {
        print!("{}", snapshot::outline(&cycle));
        return 0;
    }

    let messages = cycle.parsed.messages();
    for message in &messages {
        println!("{message}");
    }
    if messages.is_empty() { 0 } else { 1 }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let now = Instant::now();
        if event::poll(app.poll_timeout(now))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key, Instant::now()) == AppAction::Quit
        {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;
    Ok(text)
}
