mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use alien_invasion::game::{Control, Game};
use alien_invasion::input::KeyTracker;
use alien_invasion::render::{draw_frame, Viewport};
use alien_invasion::settings::Settings;

use display::{restore_terminal, setup_terminal, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "Shoot down the alien fleet before it lands")]
struct Args {
    /// TOML settings file; missing keys fall back to the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write logs here. The terminal belongs to the game, so without this
    /// flag nothing is logged.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit event arrives or the input thread goes away.
///
/// Each frame drains every pending terminal event before updating, so input
/// that arrived during a grace pause is applied late rather than lost.
fn game_loop<W: Write>(
    out: &mut TerminalRenderer<W>,
    game: &mut Game,
    tracker: &mut KeyTracker,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let mut events = Vec::new();
    let mut pointer_shown = false;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(ev) => tracker.translate(&ev, &mut events),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
        tracker.finish_frame(&mut events);
        for ev in events.drain(..) {
            if game.handle_event(ev) == Control::Quit {
                return Ok(());
            }
        }

        let report = game.tick();
        if let Some(pause) = report.pause {
            thread::sleep(pause);
        }

        if game.pointer_visible != pointer_shown {
            if game.pointer_visible {
                out.writer().execute(cursor::Show)?;
            } else {
                out.writer().execute(cursor::Hide)?;
            }
            pointer_shown = game.pointer_visible;
        }

        out.set_viewport(tracker.viewport());
        draw_frame(game, out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    let mut game = Game::new(settings).context("invalid settings")?;
    let frame = Duration::from_secs(1) / args.fps;

    let (cols, rows) = terminal::size().context("cannot query terminal size")?;
    let viewport = Viewport::new(cols, rows, game.settings.screen_width, game.settings.screen_height);

    let mut out = BufWriter::new(stdout());
    let enhance_keyboard = terminal::supports_keyboard_enhancement().unwrap_or(false);
    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    let keyboard_enhanced = match setup_terminal(&mut out, enhance_keyboard) {
        Ok(enhanced) => enhanced,
        Err(e) => {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("cannot prepare terminal");
        }
    };

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    info!(cols, rows, fps = args.fps, keyboard_enhanced, "terminal ready");
    let mut tracker = KeyTracker::new(viewport, keyboard_enhanced);
    let mut renderer = TerminalRenderer::new(out, viewport);
    let result = game_loop(&mut renderer, &mut game, &mut tracker, &rx, frame);

    // Always restore the terminal
    restore_terminal(renderer.writer(), keyboard_enhanced);
    let _ = terminal::disable_raw_mode();

    info!(high_score = game.stats.high_score, "session ended");
    result.context("terminal I/O failed")
}
