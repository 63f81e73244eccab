use std::path::PathBuf;

use macroquad::prelude::*;
use tracing::{error, info, warn};

use invaders_app::assets::Sprites;
use invaders_app::config::{Config, DEFAULT_CONFIG_PATH};
use invaders_app::control;
use invaders_app::input::{self, InputTracker};
use invaders_app::logging;
use invaders_app::render::Renderer;
use invaders_app::state::AppState;
use invaders_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use invaders_core::enums::GamePhase;
use invaders_sim::engine::SimConfig;

fn window_conf() -> Conf {
    Conf {
        window_title: "Invaders".to_owned(),
        window_width: FIELD_WIDTH as i32,
        window_height: FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(err) => {
            logging::init(tracing::level_filters::LevelFilter::INFO);
            error!("failed to load config from {}: {}", path.display(), err);
            return;
        }
    };
    logging::init(config.log_filter());
    info!(?path, seed = config.seed, "starting invaders");

    let sprites = Sprites::load(&config.assets_dir);
    let mut renderer = Renderer::new(sprites, config.display.show_hitboxes);

    let state = AppState::new();
    if let Err(err) = control::start_simulation(&state, SimConfig { seed: config.seed }) {
        error!("failed to start simulation: {}", err);
        return;
    }

    prevent_quit();
    let mut tracker = InputTracker::new();

    loop {
        let snapshot = match control::get_snapshot(&state) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!("{}", err);
                break;
            }
        };

        let phase = snapshot.as_ref().map_or(GamePhase::Title, |s| s.phase);
        for command in tracker.update(input::read_keys(), phase) {
            if let Err(err) = control::send_command(&state, command) {
                warn!("dropped command: {}", err);
            }
        }

        renderer.draw(snapshot.as_ref());

        if is_quit_requested() {
            break;
        }
        next_frame().await;
    }

    if let Err(err) = control::stop_simulation(&state) {
        error!("failed to stop simulation: {}", err);
    }
}
