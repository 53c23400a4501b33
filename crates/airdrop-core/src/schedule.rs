//! Window schedule: picks the active window and derives its phase.
//!
//! This is the parent-side date-window computation. The registration
//! screen itself only receives the results.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::PortalError;
use crate::window::{AirdropWindow, WindowStatus};

/// Ordered set of airdrop windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirdropSchedule {
    windows: Vec<AirdropWindow>,
}

impl AirdropSchedule {
    /// Validates every window and sorts them by order.
    ///
    /// Ids and orders must both be unique; windows are looked up by id.
    pub fn new(mut windows: Vec<AirdropWindow>) -> Result<Self, PortalError> {
        let mut orders = HashSet::new();
        let mut ids = HashSet::new();
        for window in &windows {
            window.validate()?;
            if !orders.insert(window.airdrop_window_order) {
                return Err(PortalError::DuplicateOrder {
                    order: window.airdrop_window_order,
                });
            }
            if !ids.insert(window.airdrop_window_id) {
                return Err(PortalError::DuplicateId {
                    window_id: window.airdrop_window_id,
                });
            }
        }
        windows.sort_by_key(|w| w.airdrop_window_order);
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[AirdropWindow] {
        &self.windows
    }

    pub fn total_windows(&self) -> u32 {
        self.windows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// First window whose claim period has not ended, else the last window.
    pub fn active_window(&self, now: DateTime<Utc>) -> Option<&AirdropWindow> {
        self.windows
            .iter()
            .find(|w| now <= w.airdrop_window_claim_end_period)
            .or_else(|| self.windows.last())
    }

    /// 1-based position of a window for the "N / M" display.
    pub fn position(&self, window: &AirdropWindow) -> Option<u32> {
        self.windows
            .iter()
            .position(|w| w.airdrop_window_id == window.airdrop_window_id)
            .map(|idx| idx as u32 + 1)
    }

    /// Status of a window at `now`.
    ///
    /// Windows past their claim end stay in `Claim`; the screen then falls
    /// back to the schedule surface because the claim check fails.
    pub fn status_at(window: &AirdropWindow, now: DateTime<Utc>) -> WindowStatus {
        if now < window.airdrop_window_registration_start_period {
            WindowStatus::Upcoming
        } else if now <= window.airdrop_window_registration_end_period {
            WindowStatus::Registration
        } else if now < window.airdrop_window_claim_start_period {
            WindowStatus::Idle
        } else {
            WindowStatus::Claim
        }
    }

    /// The instant the countdown runs towards for a given status.
    pub fn countdown_target(window: &AirdropWindow, status: WindowStatus) -> DateTime<Utc> {
        match status {
            WindowStatus::Upcoming => window.airdrop_window_registration_start_period,
            WindowStatus::Registration => window.airdrop_window_registration_end_period,
            WindowStatus::Idle => window.airdrop_window_claim_start_period,
            WindowStatus::Claim => window.airdrop_window_claim_end_period,
        }
    }

    /// Returns a copy of the active window with its status refreshed for `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> Option<AirdropWindow> {
        let mut window = self.active_window(now)?.clone();
        let status = Self::status_at(&window, now);
        if window.airdrop_window_status != status {
            tracing::debug!(
                window_id = window.airdrop_window_id,
                from = %window.airdrop_window_status,
                to = %status,
                "window status advanced"
            );
        }
        window.airdrop_window_status = status;
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn window(id: u32, order: u32, start: DateTime<Utc>) -> AirdropWindow {
        AirdropWindow {
            airdrop_window_id: id,
            airdrop_window_order: order,
            airdrop_window_name: None,
            airdrop_window_status: WindowStatus::Upcoming,
            airdrop_window_registration_start_period: start,
            airdrop_window_registration_end_period: start + Duration::days(5),
            airdrop_window_claim_start_period: start + Duration::days(7),
            airdrop_window_claim_end_period: start + Duration::days(14),
            airdrop_window_total_tokens: None,
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
    }

    fn schedule() -> AirdropSchedule {
        AirdropSchedule::new(vec![
            window(20, 2, base() + Duration::days(30)),
            window(10, 1, base()),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorted_by_order() {
        let s = schedule();
        assert_eq!(s.windows()[0].airdrop_window_id, 10);
        assert_eq!(s.total_windows(), 2);
        assert_eq!(s.position(&s.windows()[1]), Some(2));
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let err = AirdropSchedule::new(vec![window(1, 1, base()), window(2, 1, base())]).unwrap_err();
        assert!(matches!(err, PortalError::DuplicateOrder { order: 1 }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let second = window(9, 2, base() + Duration::days(30));
        let err = AirdropSchedule::new(vec![window(9, 1, base()), second]).unwrap_err();
        assert!(matches!(err, PortalError::DuplicateId { window_id: 9 }));
    }

    #[test]
    fn test_position_follows_order() {
        let s = schedule();
        let later = s.active_window(base() + Duration::days(31)).unwrap();
        assert_eq!(later.airdrop_window_order, 2);
        assert_eq!(s.position(later), Some(2));
    }

    #[test]
    fn test_active_window_progression() {
        let s = schedule();
        assert_eq!(s.active_window(base()).unwrap().airdrop_window_id, 10);
        let after_first = base() + Duration::days(15);
        assert_eq!(s.active_window(after_first).unwrap().airdrop_window_id, 20);
        let after_all = base() + Duration::days(100);
        assert_eq!(s.active_window(after_all).unwrap().airdrop_window_id, 20);
        assert!(AirdropSchedule::default().active_window(base()).is_none());
    }

    #[test]
    fn test_status_phases() {
        let w = window(1, 1, base());
        assert_eq!(AirdropSchedule::status_at(&w, base() - Duration::days(1)), WindowStatus::Upcoming);
        assert_eq!(AirdropSchedule::status_at(&w, base() + Duration::days(1)), WindowStatus::Registration);
        assert_eq!(AirdropSchedule::status_at(&w, base() + Duration::days(6)), WindowStatus::Idle);
        assert_eq!(AirdropSchedule::status_at(&w, base() + Duration::days(8)), WindowStatus::Claim);
    }

    #[test]
    fn test_countdown_targets() {
        let w = window(1, 1, base());
        assert_eq!(AirdropSchedule::countdown_target(&w, WindowStatus::Upcoming), base());
        assert_eq!(
            AirdropSchedule::countdown_target(&w, WindowStatus::Claim),
            w.airdrop_window_claim_end_period
        );
    }

    #[test]
    fn test_resolve_refreshes_status() {
        let s = schedule();
        let resolved = s.resolve(base() + Duration::days(8)).unwrap();
        assert_eq!(resolved.airdrop_window_id, 10);
        assert_eq!(resolved.airdrop_window_status, WindowStatus::Claim);
    }
}
