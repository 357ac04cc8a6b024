use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{debug, error, info};

use space_shooter::compute::init_session;
use space_shooter::config::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS, TITLE};
use space_shooter::display::{self, Viewport};
use space_shooter::entities::GameSession;
use space_shooter::error::{GameError, Result};
use space_shooter::game::{run_frame, Command, FrameClock};
use space_shooter::input::{translate, HeldKeys, InputEvent};
use space_shooter::logging;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the session reaches game over (quit or collision).
///
/// Input is drained without blocking at the top of every frame, so the
/// whole game stays on one thread; the only wait is the frame throttle.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameSession,
    viewport: &mut Viewport,
) -> Result<()> {
    let mut rng = thread_rng();
    let mut held = HeldKeys::new();
    let mut clock = FrameClock::new();
    let mut commands = Vec::new();

    while state.is_running() {
        let frame = state.frame;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        commands.clear();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            held.observe(&ev, frame);
            match translate(&ev) {
                Some(InputEvent::Quit) => commands.push(Command::Quit),
                Some(InputEvent::Fire) => commands.push(Command::Fire),
                Some(InputEvent::Resize { cols, rows }) => {
                    debug!(cols, rows, "terminal resized");
                    *viewport = Viewport::new(cols, rows);
                }
                None => {}
            }
        }

        *state = run_frame(state, &commands, held.controls(frame), &mut rng);

        display::render(out, state, *viewport)?;
        clock.wait();
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn check_terminal() -> Result<Viewport> {
    let (cols, rows) = terminal::size()?;
    if cols < MIN_TERMINAL_COLS || rows < MIN_TERMINAL_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_TERMINAL_COLS,
            min_rows: MIN_TERMINAL_ROWS,
        });
    }
    Ok(Viewport::new(cols, rows))
}

fn play() -> Result<GameSession> {
    let mut viewport = check_terminal()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(TITLE))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let mut state = init_session(&mut thread_rng());
    info!(
        cols = viewport.cols,
        rows = viewport.rows,
        keyboard_enhanced,
        "session started"
    );
    let result = game_loop(&mut out, &mut state, &mut viewport);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map(|()| state)
}

fn main() -> ExitCode {
    let log_path = logging::init();

    match play() {
        Ok(state) => {
            info!(
                score = state.score,
                frames = state.frame,
                status = ?state.status,
                "session ended"
            );
            println!("Game over. Score: {}", state.score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "aborted");
            eprintln!("{}: {}", TITLE, e);
            if let Some(path) = log_path {
                eprintln!("log: {}", path.display());
            }
            ExitCode::FAILURE
        }
    }
}
