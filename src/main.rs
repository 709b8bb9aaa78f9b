//! Terminal bowling scoreboard (default binary).
//!
//! Rolls are keyed in one at a time; the scoreboard is redrawn after every key.
//! It uses crossterm for input and a framebuffer-based renderer.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{with_terminal, FrameBuffer, ScoreboardView, TerminalRenderer, Viewport};
use tui_bowling::{Config, RollLog, Session};

fn main() -> Result<()> {
    let config = Config::from_env();
    let log = open_log(&config);
    let mut session = Session::new(log);

    let mut term = TerminalRenderer::new();
    let result = with_terminal(&mut term, |term| run(term, &config, &mut session));

    if let Some(e) = session.log().failure() {
        eprintln!("[Bowling] Roll log disabled after write failure: {:#}", e);
    }
    if session.game().roll_count() > 0 {
        println!(
            "[Bowling] {} scored {}",
            config.player,
            session.snapshot().total
        );
    }
    result
}

fn open_log(config: &Config) -> RollLog {
    let Some(path) = config.log_path.as_deref() else {
        return RollLog::disabled();
    };
    match RollLog::open(path) {
        Ok(log) => {
            println!("[Bowling] Logging rolls to {}", path);
            log
        }
        Err(e) => {
            eprintln!("[Bowling] Roll log disabled: {:#}", e);
            RollLog::disabled()
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config, session: &mut Session) -> Result<()> {
    let view = ScoreboardView::default().with_color(config.color);
    let mut fb = FrameBuffer::new(0, 0);
    let mut message: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            session.snapshot(),
            &config.player,
            message.as_deref(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    message = session.apply(action).err().map(|e| e.to_string());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
