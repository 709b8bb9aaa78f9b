//! Score a game from the command line.
//!
//! Each argument is one roll: a pin count, `X`, `/` or `-`.
//!
//! ```text
//! bowling-score X 7 / 9 - X X
//! ```

use anyhow::{bail, Result};

use tui_bowling::term::{AnchorY, ScoreboardView, Viewport};
use tui_bowling::types::GameAction;
use tui_bowling::{Config, RollLog, Session};

fn main() -> Result<()> {
    let config = Config::from_env();
    let log = match config.log_path.as_deref() {
        Some(path) => RollLog::open(path)?,
        None => RollLog::disabled(),
    };
    let mut session = Session::new(log);

    let mut rejected = None;
    for arg in std::env::args().skip(1) {
        let action = match GameAction::from_str(&arg) {
            Some(GameAction::Restart) | None => bail!("not a roll: {:?}", arg),
            Some(action) => action,
        };
        if let Err(e) = session.apply(action) {
            rejected = Some(format!("roll {:?} rejected: {}", arg, e));
            break;
        }
    }

    let view = ScoreboardView::default()
        .with_anchor_y(AnchorY::Top)
        .with_color(false);
    let fb = view.render(
        session.snapshot(),
        &config.player,
        rejected.as_deref(),
        Viewport::fit(),
    );
    for line in fb.to_lines() {
        println!("{}", line);
    }

    if let Some(e) = session.log().failure() {
        eprintln!("[Bowling] Roll log disabled after write failure: {:#}", e);
    }
    if let Some(msg) = rejected {
        bail!(msg);
    }
    Ok(())
}
