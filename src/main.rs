mod config;
mod render;
mod scene;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, terminal,
};
use rand::RngExt;
use render::{Canvas, ColorMode, RenderMode, Viewport};
use scene::HouseScene;
use scene::smoke::SmokeParams;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "cottage", about = "A little house in the terminal: chimney smoke and a day/night cycle")]
struct Cli {
    /// Render mode (default: half-block)
    #[arg(short, long, value_enum)]
    render: Option<RenderMode>,

    /// Color mode (default: true-color)
    #[arg(short, long, value_enum)]
    color: Option<ColorMode>,

    /// Milliseconds between animation ticks (10-2000)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Time-of-day change per tick (0.0001-0.5)
    #[arg(short, long)]
    time_step: Option<f64>,

    /// Random seed for reproducible smoke
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (0 = run until quit)
    #[arg(long, default_value = "0")]
    ticks: u64,

    /// Hide the status bar
    #[arg(long)]
    clean: bool,

    /// Print the config file path and a commented default config, then exit
    #[arg(long)]
    show_config: bool,
}

/// Everything the loop needs, after merging CLI over config over defaults.
struct Settings {
    render: RenderMode,
    color: ColorMode,
    interval: Duration,
    time_step: f64,
    seed: Option<u64>,
    max_ticks: u64,
    clean: bool,
    color_quant: u8,
    smoke: SmokeParams,
}

impl Settings {
    fn resolve(cli: &Cli, cfg: &config::Config) -> Self {
        let interval_ms = cli
            .interval
            .or(cfg.interval_ms)
            .unwrap_or(config::DEFAULT_INTERVAL_MS);
        let time_step = cli
            .time_step
            .or(cfg.time_step)
            .unwrap_or(config::DEFAULT_TIME_STEP);
        Settings {
            render: cli.render.or(cfg.render.map(Into::into)).unwrap_or(RenderMode::HalfBlock),
            color: cli.color.or(cfg.color.map(Into::into)).unwrap_or(ColorMode::TrueColor),
            interval: Duration::from_millis(config::clamp_setting(
                "interval_ms",
                interval_ms,
                &config::INTERVAL_RANGE,
            )),
            time_step: config::clamp_setting("time_step", time_step, &config::TIME_STEP_RANGE),
            seed: cli.seed.or(cfg.seed),
            max_ticks: cli.ticks,
            clean: cli.clean || cfg.clean.unwrap_or(false),
            color_quant: cfg.color_quant.unwrap_or(0),
            smoke: cfg.smoke.params(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        match config::config_path() {
            Some(path) => println!("# Config file: {}\n", path.display()),
            None => println!("# No config directory on this platform\n"),
        }
        print!("{}", config::default_config_string());
        return Ok(());
    }

    // Warnings from config resolution go to stderr before the alternate screen hides them
    let settings = Settings::resolve(&cli, &config::load_config());

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let mut writer = BufWriter::with_capacity(256 * 1024, stdout);
    let result = run_loop(&mut writer, &settings);

    // Cleanup
    execute!(writer, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn build_canvas(cols: u16, rows: u16, settings: &Settings) -> Canvas {
    // Reserve 1 row for status bar
    let display_rows = if settings.clean {
        rows as usize
    } else {
        (rows as usize).saturating_sub(1)
    };
    let mut canvas = Canvas::new(cols as usize, display_rows, settings.render, settings.color);
    canvas.color_quant = settings.color_quant;
    canvas
}

/// One iteration per tick: handle input, redraw the current state, then sleep out the
/// rest of the interval and advance the scene. Returns when the user quits or the
/// tick limit is reached.
fn run_loop(stdout: &mut BufWriter<io::Stdout>, settings: &Settings) -> io::Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    let mut canvas = build_canvas(cols, rows, settings);

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    let mut scene = HouseScene::new(settings.smoke, settings.time_step, seed);

    let mut rebuild_canvas = false;
    let mut frame_count: u64 = 0;
    let mut actual_fps: f64 = 0.0;
    let mut fps_update = Instant::now();

    loop {
        let tick_start = Instant::now();

        // Handle input (non-blocking)
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Resize(w, h) => {
                    if w >= 10 && h >= 5 {
                        cols = w;
                        rows = h;
                        rebuild_canvas = true;
                    }
                }
                Event::Key(KeyEvent {
                    code, modifiers, ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if rebuild_canvas {
            canvas = build_canvas(cols, rows, settings);
            write!(stdout, "\x1b[2J\x1b[H")?;
            rebuild_canvas = false;
        }

        // Full redraw every tick
        {
            let mut viewport = Viewport::fit(&mut canvas);
            scene.draw(&mut viewport);
        }
        let frame = canvas.render();
        stdout.write_all(b"\x1b[H")?;
        stdout.write_all(frame.as_bytes())?;

        frame_count += 1;
        if fps_update.elapsed() >= Duration::from_secs(1) {
            actual_fps = frame_count as f64 / fps_update.elapsed().as_secs_f64();
            frame_count = 0;
            fps_update = Instant::now();
        }
        if !settings.clean {
            let lighting = scene.lighting();
            let status = format!(
                " cottage | {} {:.2}{} | {} puffs | tick {} | {:.0} fps | {:?} | {:?} | [q] quit ",
                lighting.phase(),
                lighting.time,
                if scene.darkening() { "↑" } else { "↓" },
                scene.puff_count(),
                scene.ticks(),
                actual_fps,
                settings.render,
                settings.color,
            );
            let w = cols as usize;
            let truncated: String = status.chars().take(w).collect();
            let padded = format!("{:<width$}", truncated, width = w);
            write!(stdout, "\x1b[{};1H\x1b[7m{}\x1b[0m", rows, padded)?;
        }

        // Single flush per frame
        stdout.flush()?;

        if settings.max_ticks > 0 && scene.ticks() >= settings.max_ticks {
            return Ok(());
        }

        let elapsed = tick_start.elapsed();
        if elapsed < settings.interval {
            std::thread::sleep(settings.interval - elapsed);
        }
        scene.tick();
    }
}
