mod app;
mod catalog;
mod error;
mod gallery;
mod modal;
mod preferences;
mod theme;
mod ui;

use app::App;
use catalog::Portfolio;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use error::AppError;
use gallery::Gallery;
use modal::{Action, ModalContent};
use preferences::PreferenceStore;
use ratatui::layout::Position;
use std::path::{Path, PathBuf};
use theme::{Theme, ThemeSetting};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal portfolio: project gallery with a detail view
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding preferences.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive gallery (default)
    Run,
    /// Print one line per project card, in gallery order
    List,
    /// Print the detail view of one project
    Show {
        /// Project id as shown by `list`
        id: String,
    },
    /// Print or change the stored theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

const LOG_ENV: &str = "PORTFOLIO_LOG";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);
    let interactive = matches!(command, Commands::Run);
    init_logging(interactive);

    if let Err(e) = dispatch(command, cli.config_dir.as_deref()) {
        tracing::error!(error = %e, "exiting");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
    Ok(())
}

fn dispatch(command: Commands, config_dir: Option<&Path>) -> Result<(), AppError> {
    let portfolio = Portfolio::builtin()?;

    match command {
        Commands::List => {
            for line in list_lines(&portfolio) {
                println!("{}", line);
            }
        }
        Commands::Show { id } => {
            let project = portfolio
                .find(&id)
                .ok_or_else(|| AppError::UnknownProject(id.clone()))?;
            print!("{}", format_detail(&ModalContent::from(project.as_ref())));
        }
        Commands::Theme { action } => {
            let dir = preferences::config_dir(config_dir)?;
            let store = PreferenceStore::open(&dir);
            tracing::debug!(path = %store.path().display(), "theme preference");
            let mut setting = ThemeSetting::load(store);
            match action {
                None => {}
                Some(ThemeArg::Toggle) => {
                    setting.toggle()?;
                }
                Some(ThemeArg::Light) => setting.set(Theme::Light)?,
                Some(ThemeArg::Dark) => setting.set(Theme::Dark)?,
            }
            println!("{}", setting.current().as_str());
        }
        Commands::Run => {
            let store = match preferences::config_dir(config_dir) {
                Ok(dir) => PreferenceStore::open(&dir),
                Err(e) => {
                    eprintln!("Warning: {}", e.user_message());
                    PreferenceStore::open(&std::env::temp_dir().join("portfolio-explorer"))
                }
            };
            tracing::info!(path = %store.path().display(), "preferences");
            let mut app = App::new(portfolio, ThemeSetting::load(store));

            // Init terminal
            let mut terminal = ratatui::init();
            with_restore(
                || {
                    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
                    let size = terminal.size()?;
                    app.resize(size.width, size.height);

                    // Main loop
                    run_app(&mut terminal, &mut app)
                },
                || {
                    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
                    ratatui::restore();
                },
            )?;
        }
    }
    Ok(())
}

/// Run `body`, then `restore` whether or not `body` failed.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T, AppError>,
    restore: impl FnOnce(),
) -> Result<T, AppError> {
    let result = body();
    restore();
    result
}

/// One line per gallery card: id, title and badge tag.
fn list_lines(portfolio: &Portfolio) -> Vec<String> {
    let mut cards = Gallery::new();
    gallery::render(&portfolio.projects, Some(&mut cards));
    cards
        .cards()
        .iter()
        .map(|card| format!("{:<24} {:<40} [{}]", card.id(), card.title(), card.tag().unwrap_or("")))
        .collect()
}

/// Plain-text rendering of the detail view.
fn format_detail(content: &ModalContent) -> String {
    let mut out = String::new();
    out.push_str(&content.title);
    out.push('\n');
    out.push_str(&"=".repeat(content.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!("Image: {}\n\n", content.image));
    out.push_str(&content.description);
    out.push_str("\n\nTechnologies Used: ");
    out.push_str(&content.tags.join(", "));
    out.push('\n');
    for action in Action::ALL {
        let link = content.action(action);
        let target = link.target().unwrap_or("(no link yet)");
        out.push_str(&format!("{}: {}\n", action.label(), target));
    }
    out
}

/// Logs go to a file while the terminal UI owns the screen, to stderr otherwise.
fn init_logging(interactive: bool) {
    let default_filter = if interactive {
        "portfolio_explorer=info"
    } else {
        "portfolio_explorer=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| default_filter.into());

    if interactive {
        let Some(file) = open_log_file() else {
            return;
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn open_log_file() -> Option<std::fs::File> {
    let project_dirs = directories::ProjectDirs::from("dev", "portfolio", "portfolio-explorer")?;
    let dir = project_dirs.data_dir();
    std::fs::create_dir_all(dir).ok()?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("portfolio.log"))
        .ok()
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key);
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(width, height) => {
                    app.resize(width, height);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if key.code == KeyCode::Char('t') {
        app.toggle_theme();
        return;
    }

    if app.modal.is_open() {
        handle_modal_key(app, key);
    } else {
        handle_gallery_key(app, key);
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Left | KeyCode::Char('h') => app.select_left(),
        KeyCode::Right | KeyCode::Char('l') => app.select_right(),
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::PageDown => app.scroll_gallery(1),
        KeyCode::PageUp => app.scroll_gallery(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => app.close_modal(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_modal_down(),
        KeyCode::Up | KeyCode::Char('k') => app.modal.scroll_body_up(),
        KeyCode::Char('d') => {
            if let Some(url) = app.activate(Action::Demo) {
                open_external(app, &url);
            }
        }
        KeyCode::Char('g') => {
            if let Some(url) = app.activate(Action::Source) {
                open_external(app, &url);
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(url) = app.click(Position::new(mouse.column, mouse.row)) {
                open_external(app, &url);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.modal.is_open() {
                app.scroll_modal_down();
            } else {
                app.scroll_gallery(1);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.modal.is_open() {
                app.modal.scroll_body_up();
            } else {
                app.scroll_gallery(-1);
            }
        }
        _ => {}
    }
}

/// Open a URL with the platform opener, outside the terminal.
fn open_external(app: &mut App, url: &str) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let spawned = if cfg!(target_os = "windows") {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
    } else {
        std::process::Command::new(opener)
            .arg(url)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
    };
    match spawned {
        Ok(_) => tracing::info!(%url, "opened link"),
        Err(e) => {
            tracing::warn!(%url, error = %e, "could not open link");
            app.status_msg = format!("Link: {} (no opener available)", url);
        }
    }
}
