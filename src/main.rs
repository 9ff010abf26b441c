//! Terminal Tower of Hanoi runner.
//!
//! Owns all timing policy: the core playback is passive, and this loop
//! calls `step()` once per animation interval while solving. Input is
//! polled with a timeout so key presses stay responsive between moves.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, warn};

use tui_hanoi::core::{HanoiError, Playback};
use tui_hanoi::input::{handle_key_event, should_quit, AppAction};
use tui_hanoi::term::{HanoiView, TerminalRenderer, Viewport};
use tui_hanoi::types::{
    PlaybackState, Speed, DEFAULT_DISKS, INPUT_POLL_MS, MAX_DISKS, MIN_DISKS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    disks: u8,
    speed: Speed,
    log_file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            disks: DEFAULT_DISKS,
            speed: Speed::Normal,
            log_file: PathBuf::from("tui-hanoi.log"),
        }
    }
}

const USAGE: &str = "\
tui-hanoi - terminal Tower of Hanoi visual solver

USAGE:
    tui-hanoi [--disks N] [--speed slow|normal|fast] [--log-file PATH]

OPTIONS:
    --disks N       number of disks, 3 to 10 (default 3)
    --speed PRESET  animation speed preset (default normal)
    --log-file PATH log destination (default tui-hanoi.log)
    --help          print this help";

/// Parse command-line arguments. Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--disks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --disks"))?;
                let n = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --disks value: {}", v))?;
                if !(MIN_DISKS..=MAX_DISKS).contains(&n) {
                    return Err(anyhow!(
                        "--disks must be between {} and {}, got {}",
                        MIN_DISKS,
                        MAX_DISKS,
                        n
                    ));
                }
                options.disks = n;
            }
            "--speed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --speed"))?;
                options.speed = Speed::from_str(v)
                    .ok_or_else(|| anyhow!("invalid --speed value: {}", v))?;
            }
            "--log-file" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                options.log_file = PathBuf::from(v);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(None);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(Some(options))
}

/// Route log output to a file; stdout/stderr belong to the raw-mode UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };
    init_logging(&options.log_file)?;
    info!(
        "starting with {} disks, speed {}",
        options.disks,
        options.speed.as_str()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct App {
    playback: Playback,
    speed: Speed,
    show_help: bool,
    last_step: Instant,
}

impl App {
    fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Start => match self.playback.state() {
                PlaybackState::Idle => {
                    if self.playback.start().is_ok() {
                        self.last_step = Instant::now();
                    }
                }
                PlaybackState::Paused => {
                    if self.playback.resume().is_ok() {
                        self.last_step = Instant::now();
                    }
                }
                _ => {}
            },
            AppAction::TogglePause => match self.playback.state() {
                PlaybackState::Running => {
                    let _ = self.playback.pause();
                }
                PlaybackState::Paused => {
                    // A full interval elapses before the next move fires,
                    // regardless of how long the pause lasted.
                    if self.playback.resume().is_ok() {
                        self.last_step = Instant::now();
                    }
                }
                // Racing key press outside a run; nothing to toggle.
                _ => {}
            },
            AppAction::Reset => {
                self.playback.reset();
            }
            AppAction::CycleSpeed => {
                self.speed = self.speed.next();
                info!("speed set to {}", self.speed.as_str());
            }
            AppAction::SetSpeed(speed) => {
                self.speed = speed;
                info!("speed set to {}", self.speed.as_str());
            }
            AppAction::DiskUp => self.adjust_disks(1),
            AppAction::DiskDown => self.adjust_disks(-1),
            AppAction::ToggleHelp => {
                self.show_help = !self.show_help;
            }
        }
    }

    fn adjust_disks(&mut self, delta: i8) {
        if self.playback.state() != PlaybackState::Idle {
            warn!("disk count can only change while idle");
            return;
        }
        let current = self.playback.disk_count() as i8;
        let next = (current + delta).clamp(MIN_DISKS as i8, MAX_DISKS as i8) as u8;
        if next != self.playback.disk_count() {
            // Range is clamped above, so configure can only fail on state.
            let _ = self.playback.configure(next);
        }
    }

    /// Apply the next move when the animation interval has elapsed.
    fn tick(&mut self) {
        if self.playback.state() != PlaybackState::Running {
            return;
        }
        let interval = Duration::from_millis(self.speed.interval_ms());
        if self.last_step.elapsed() < interval {
            return;
        }
        self.last_step = Instant::now();

        match self.playback.step() {
            Ok(_) => {}
            Err(err @ HanoiError::InvalidMove(_)) => {
                // Consistency defect between generator and pegs; abandon the run.
                error!("{}; forcing reset", err);
                self.playback.reset();
            }
            Err(err) => {
                warn!("step skipped: {}", err);
            }
        }
    }
}

fn run(term: &mut TerminalRenderer, options: Options) -> Result<()> {
    let mut app = App {
        playback: Playback::new(options.disks)?,
        speed: options.speed,
        show_help: false,
        last_step: Instant::now(),
    };
    let view = HanoiView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(
            &app.playback.snapshot(),
            app.speed,
            app.show_help,
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Input with timeout: short enough to keep keys responsive, capped
        // by the time until the next scheduled move.
        let poll_cap = Duration::from_millis(INPUT_POLL_MS);
        let timeout = if app.playback.state() == PlaybackState::Running {
            Duration::from_millis(app.speed.interval_ms())
                .checked_sub(app.last_step.elapsed())
                .unwrap_or(Duration::ZERO)
                .min(poll_cap)
        } else {
            poll_cap
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        app.tick();
    }
}
