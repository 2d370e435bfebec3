//! # Dashboard Command
//!
//! Home-screen figures, recomputed on every call.

use chrono::Utc;
use tracing::debug;

use officine_core::dashboard::DashboardMetrics;

use crate::state::SessionState;

/// Low stock, today's sales and revenue, pending prescriptions, goal
/// progress, and the last 7 days of revenue.
pub fn get_dashboard(session: &SessionState) -> DashboardMetrics {
    debug!("get_dashboard command");
    let now = Utc::now();
    session.with_session(|s| s.pharmacy.dashboard(now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_dashboard() {
        let metrics = get_dashboard(&SessionState::with_fixtures(Utc::now()));
        assert_eq!(metrics.low_stock_count, 3);
        assert_eq!(metrics.pending_prescriptions, 1);
        assert_eq!(metrics.last_7_days.len(), 7);
    }
}
