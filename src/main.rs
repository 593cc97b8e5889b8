//! Dapper Dasher: jump the nebulae, reach the finish line
//!
//! Scarfy runs in place while a row of animated nebulae scrolls in from the
//! right over a three-layer parallax city. Touch one and the round is lost;
//! let the finish line pass underneath and it is won. Either way the world
//! freezes until the restart button is clicked.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod game;
mod input;
mod ui;

use std::sync::OnceLock;
use macroquad::prelude::*;
use assets::Textures;
use audio::AudioBank;
use config::{GameConfig, CONFIG_PATH};
use game::{renderer, Backdrop, GameState};
use input::{Action, InputState};
use ui::restart_button;

/// Frame rate the loop paces itself to
const TARGET_FPS: f64 = 60.0;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Logging and config, set up on first use. `window_conf` runs before
/// `main`, so whichever asks first does the work.
fn startup_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        init_logging();
        GameConfig::load_or_default(CONFIG_PATH)
    })
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init fails only if a subscriber is already installed
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    // No system clock on wasm32-unknown-unknown
    #[cfg(target_arch = "wasm32")]
    let _ = tracing_subscriber::fmt().with_env_filter(filter).without_time().try_init();
}

fn window_conf() -> Conf {
    let window = &startup_config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Sleep/spin until the frame has taken at least 1/TARGET_FPS seconds
fn pace_frame(frame_start: f64) {
    let target_frame_time = 1.0 / TARGET_FPS;
    if get_time() - frame_start >= target_frame_time {
        return;
    }
    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser paces requestAnimationFrame, nothing to do
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = startup_config();
    tracing::info!("=== Dapper Dasher v{} ===", VERSION);

    let textures = match Textures::load(&config.assets).await {
        Ok(textures) => textures,
        Err(e) => {
            tracing::error!("{}", e);
            return;
        }
    };
    let audio = AudioBank::load(&config.assets).await;
    audio.start_music(config.assets.music_volume);

    // World layout is fixed at startup, like the window size
    let dims = textures.world_dims(screen_width(), screen_height());
    tracing::info!(
        width = dims.screen_width,
        height = dims.screen_height,
        "World laid out"
    );
    let button = restart_button(dims.screen_width, dims.screen_height);

    let mut state = GameState::new(dims);
    let mut backdrop = Backdrop::new();
    let mut input = InputState::new();
    input.poll();
    if input.has_gamepad() {
        tracing::info!("Gamepad connected");
    }

    loop {
        let frame_start = get_time();

        input.poll();
        if input.action_pressed(Action::Quit) {
            break;
        }
        let frame = input.frame_input(button);

        backdrop.scroll(frame.delta_time, renderer::layer_widths(&textures, screen_height()));
        state.tick(&frame);
        audio.play_events(state.events.drain());

        renderer::draw_frame(&state, &textures, &backdrop);

        pace_frame(frame_start);
        next_frame().await;
    }

    tracing::info!("Shutting down");
}
