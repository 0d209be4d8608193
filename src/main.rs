//! Rock Belt headless driver
//!
//! Plays a scripted session at a fixed tick rate and renders every frame into
//! a mesh canvas.
//!
//! Usage: `rock-belt [settings.json] [seconds] [seed]`

use rock_belt::renderer::{MeshCanvas, draw_frame};
use rock_belt::sim::{GameEvent, GameState, Key, TickInput, Tier, tick};
use rock_belt::{Settings, SimResult};

/// Display refresh rate the driver pretends to run at
const FRAME_RATE: f64 = 60.0;
/// Maximum ticks per frame to prevent spiral of death
const MAX_SUBSTEPS: u32 = 8;

#[derive(Debug, Default)]
struct Stats {
    shots: u32,
    destroyed: [u32; 3],
    expired: u32,
    peak_vertices: usize,
}

impl Stats {
    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::LaserFired => self.shots += 1,
            GameEvent::AsteroidDestroyed { tier, pos } => {
                let slot = match tier {
                    Tier::Large => 0,
                    Tier::Medium => 1,
                    Tier::Small => 2,
                };
                self.destroyed[slot] += 1;
                log::debug!("{:?} asteroid destroyed at ({:.0}, {:.0})", tier, pos.x, pos.y);
            }
            GameEvent::LaserExpired => self.expired += 1,
            GameEvent::LaserSpent => {}
        }
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    mesh: MeshCanvas,
    accumulator: f64,
    /// Key edges queued since the last tick
    input: TickInput,
    stats: Stats,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> SimResult<Self> {
        Ok(Self {
            state: GameState::new(settings, seed)?,
            mesh: MeshCanvas::new(),
            accumulator: 0.0,
            input: TickInput::default(),
            stats: Stats::default(),
        })
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f64) {
        let dt = dt.min(0.1);
        self.accumulator += dt;
        let step = 1.0 / self.state.settings.fps;

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input);
            self.accumulator -= step;
            substeps += 1;

            for event in self.state.drain_events() {
                self.stats.record(event);
            }
        }
    }

    fn render(&mut self) {
        self.mesh.clear();
        draw_frame(&self.state, &mut self.mesh);
        self.stats.peak_vertices = self.stats.peak_vertices.max(self.mesh.vertex_count());
    }

    /// Autopilot: pulse thrust, turn in bursts, tap fire
    fn script(&mut self, frame: u64) {
        let mut input = std::mem::take(&mut self.input);
        match frame % 120 {
            0 => input = input.press(Key::Thrust),
            40 => input = input.release(Key::Thrust),
            _ => {}
        }
        match frame % 90 {
            0 => input = input.press(Key::RotateLeft),
            20 => input = input.release(Key::RotateLeft),
            _ => {}
        }
        match frame % 20 {
            0 => input = input.press(Key::Fire),
            5 => input = input.release(Key::Fire),
            _ => {}
        }
        self.input = input;
    }
}

fn run() -> SimResult<()> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) if path != "-" => Settings::load(path)?,
        _ => Settings::default(),
    };
    let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10.0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);

    let mut game = Game::new(settings, seed)?;
    let frames = (seconds * FRAME_RATE).ceil() as u64;
    for frame in 0..frames {
        game.script(frame);
        game.update(1.0 / FRAME_RATE);
        game.render();
    }

    let stats = &game.stats;
    log::info!(
        "{} ticks: {} shots, destroyed {}/{}/{} (large/medium/small), {} out of range, {} asteroids left",
        game.state.time_ticks,
        stats.shots,
        stats.destroyed[0],
        stats.destroyed[1],
        stats.destroyed[2],
        stats.expired,
        game.state.field.len()
    );
    log::info!("Peak frame size: {} vertices", stats.peak_vertices);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Rock Belt (headless) starting...");

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
