//! # Settings Commands
//!
//! The pharmacy profile and the dashboard's revenue goal. Both are saved
//! as entered.

use tracing::{debug, info};

use officine_core::{Money, PharmacySettings};

use crate::state::SessionState;

pub fn get_settings(session: &SessionState) -> PharmacySettings {
    debug!("get_settings command");
    session.with_session(|s| s.pharmacy.settings().clone())
}

/// Replaces the whole profile.
pub fn update_settings(session: &SessionState, settings: PharmacySettings) -> PharmacySettings {
    debug!("update_settings command");
    session.with_session_mut(|s| s.pharmacy.settings_mut().replace(settings.clone()));
    info!(name = %settings.name, "Settings updated");
    settings
}

/// Changes the daily revenue target only. A target of zero or below
/// shows no goal progress.
pub fn set_daily_target(session: &SessionState, units: i64) -> PharmacySettings {
    debug!(units, "set_daily_target command");
    session.with_session_mut(|s| {
        s.pharmacy
            .settings_mut()
            .set_daily_target(Money::from_units(units));
        info!(daily_target = units, "Daily revenue target changed");
        s.pharmacy.settings().clone()
    })
}
