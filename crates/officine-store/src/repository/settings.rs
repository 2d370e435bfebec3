//! # Settings Repository
//!
//! Holds the single pharmacy profile record. Values are saved as entered.

use tracing::debug;

use officine_core::{Money, PharmacySettings};

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    settings: PharmacySettings,
}

impl SettingsRepository {
    pub fn new(settings: PharmacySettings) -> Self {
        SettingsRepository { settings }
    }

    pub fn get(&self) -> &PharmacySettings {
        &self.settings
    }

    /// Replaces the whole profile (settings screen "save").
    pub fn replace(&mut self, settings: PharmacySettings) {
        debug!(name = %settings.name, "Replacing pharmacy settings");
        self.settings = settings;
    }

    /// Changes only the daily revenue target (dashboard goal editor).
    pub fn set_daily_target(&mut self, target: Money) {
        debug!(daily_target = %target, "Daily revenue target changed");
        self.settings.daily_revenue_target = target;
    }
}
