//! Terminal pairs runner (default binary).
//!
//! Arrow keys (or hjkl / wasd) move the cursor, space or enter flips the card
//! under it. `r` deals again, `n` switches to the next board size, `q` quits.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pairs::config::Config;
use pairs::content::JsonFileContent;
use pairs::core::{GameSession, GameSnapshot};
use pairs::input::{handle_key_event, should_quit, Cursor};
use pairs::term::{BoardView, HudView, TerminalRenderer, Viewport};
use pairs::types::InputAction;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut app = App::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = app.session.game().snapshot();
    info!(
        moves = snap.moves,
        pairs = snap.pairs_found,
        won = snap.won,
        board = %serde_json::to_string(&snap)?,
        "session ended"
    );
    result
}

fn init_logging(config: &Config) -> Result<()> {
    // The terminal is in raw mode while playing, so logs only ever go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct App {
    session: GameSession,
    cursor: Cursor,
    message: Option<String>,
    /// Set after a first `r` while a game is in progress.
    confirm_restart: bool,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let mut session = GameSession::new(config.board_size, config.seed)
            .context("dealing the first game")?;
        info!(seed = config.seed, board = config.board_size.name(), "starting");

        let mut message = None;
        if let Some(name) = &config.game {
            let provider = JsonFileContent::new(&config.content_dir);
            message = Some(match session.load_from(&provider, name) {
                Ok(()) => format!("You're now playing {}", session.title()),
                Err(e) => {
                    warn!(name = %name, error = %e, "could not load custom game");
                    format!("Sorry, {e}")
                }
            });
        }

        let cursor = Cursor::new(session.board_size());
        Ok(Self {
            session,
            cursor,
            message,
            confirm_restart: false,
        })
    }

    fn handle(&mut self, action: InputAction) -> Result<()> {
        let confirming = std::mem::take(&mut self.confirm_restart);
        self.message = None;

        match action {
            InputAction::Move(direction) => self.cursor.apply(direction),
            InputAction::Flip => match self.session.flip(self.cursor.position()) {
                Ok(notice) => self.message = notice.message().map(str::to_string),
                Err(e) => self.message = Some(e.to_string()),
            },
            InputAction::Restart => {
                if self.session.needs_restart_confirmation() && !confirming {
                    self.confirm_restart = true;
                    self.message = Some("Quit your current game? Press r again".to_string());
                } else {
                    self.session.restart()?;
                    self.message = Some(self.session.board_size().description());
                }
            }
            InputAction::NextBoardSize => {
                let next = self.session.board_size().next();
                self.session.set_board_size(next)?;
                self.cursor.resize(next);
                self.message = Some(next.description());
            }
        }
        Ok(())
    }

    fn render(&self, view: &BoardView, viewport: Viewport) -> pairs::term::FrameBuffer {
        let snap: GameSnapshot = self.session.game().snapshot();
        let pairs = self.session.pairs_label();
        let moves = self.session.moves_label();
        let hud = HudView {
            title: self.session.title(),
            pairs: &pairs,
            moves: &moves,
            message: self.message.as_deref(),
        };
        view.render(&snap, &hud, self.cursor.position(), viewport)
    }
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = BoardView::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&app.render(&view, Viewport::new(w, h)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.handle(action)?;
                }
            }
            // Resize and everything else just trigger a redraw.
            _ => {}
        }
    }
}
