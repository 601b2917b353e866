#![warn(non_snake_case)]
//! # LethalDungeon Entry Point
//!
//! Runs the plugin's startup outside of the game: reads (or creates) the config next to
//! the binary, loads the `exampledungeon` asset bundle, and registers the dungeon with an
//! in-memory selection pool. Pass a directory as the first argument to use it instead of
//! the binary's own directory.
//!
//! ## License
//! Licensed under the MIT License.

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use log::{error, info};

use lethal_dungeon::config::{DungeonConfig, CONFIG_FILE_NAME};
use lethal_dungeon::dungeon::{DungeonPool, BUNDLE_FILE_NAME};
use lethal_dungeon::level::LevelTypes;
use lethal_dungeon::plugin::{
    LethalDungeon, Registration, PLUGIN_GUID, PLUGIN_NAME, PLUGIN_VERSION,
};

/// Directory holding the config and the asset bundle.
fn plugin_dir() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| {
            env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("{} {} ({}) starting...", PLUGIN_NAME, PLUGIN_VERSION, PLUGIN_GUID);

    let dir = plugin_dir();
    let config = DungeonConfig::load_or_create(&dir.join(CONFIG_FILE_NAME))?;

    let mut plugin = LethalDungeon::new(config);
    let mut pool = DungeonPool::new();

    // A failed startup only makes the dungeon unavailable; it is not fatal.
    match plugin.startup_from_file(&dir.join(BUNDLE_FILE_NAME), &mut pool) {
        Ok(Registration::Registered(types)) => {
            for (name, moon) in LevelTypes::all().iter_names() {
                if types.contains(moon) {
                    info!(
                        "{}: total dungeon weight {}",
                        name,
                        pool.total_weight_for(moon)
                    );
                }
            }
        }
        Ok(Registration::AlreadyRegistered) => {}
        Err(err) => error!("{}", err),
    }

    info!("{} exiting.", PLUGIN_NAME);
    Ok(())
}
