use serde::{Deserialize, Serialize};

use crate::TITLE;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub reach: f32,
    pub seed: u32,
    pub flat_world: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reach: 8.0,
            seed: 0,
            flat_world: true,
        }
    }
}

impl Settings {
    pub fn load_from_file() -> Self {
        match confy::load(TITLE, Some(TITLE)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load config from file - {}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(TITLE, Some(TITLE), self) {
            log::error!("Failed to save config to file - {}", e);
        }
    }
}
