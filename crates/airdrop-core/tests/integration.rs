use std::cell::{Cell, RefCell};
use std::rc::Rc;

use airdrop_core::*;
use chrono::{DateTime, Duration, TimeZone, Utc};

// ----------------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
}

fn window(status: WindowStatus) -> AirdropWindow {
    AirdropWindow {
        airdrop_window_id: 3,
        airdrop_window_order: 3,
        airdrop_window_name: Some("Third vesting window".to_string()),
        airdrop_window_status: status,
        airdrop_window_registration_start_period: base(),
        airdrop_window_registration_end_period: base() + Duration::days(3),
        airdrop_window_claim_start_period: base() + Duration::days(5),
        airdrop_window_claim_end_period: base() + Duration::days(9),
        airdrop_window_total_tokens: Some(250_000_000_000),
    }
}

fn agix_stake() -> StakeInfo {
    StakeInfo {
        stakable_tokens: 5_000_000,
        stakable_token_name: "AGIX".to_string(),
        claimable_tokens_to_wallet: 2_000_000,
        is_stakable: true,
        is_loading: false,
    }
}

// ----------------------------------------------------------------------------
// Rendering properties
// ----------------------------------------------------------------------------

#[test]
fn test_no_window_no_view() {
    for status in [None, Some(WindowStatus::Claim), Some(WindowStatus::Registration)] {
        assert!(RegistrationView::derive(None, status, 1, &agix_stake(), base()).is_none());
    }
}

#[test]
fn test_badge_empty_outside_both_windows() {
    let w = window(WindowStatus::Claim);
    let outside = [
        base() - Duration::seconds(1),
        base() + Duration::days(4),
        base() + Duration::days(9) + Duration::seconds(1),
        base() + Duration::days(365),
    ];
    for status in [
        WindowStatus::Upcoming,
        WindowStatus::Registration,
        WindowStatus::Idle,
        WindowStatus::Claim,
    ] {
        for now in outside {
            let view = RegistrationView::derive(Some(&w), Some(status), 0, &agix_stake(), now).unwrap();
            assert_eq!(view.badge, "", "status {status} at {now}");
        }
    }
}

#[test]
fn test_reward_text_in_claim_window() {
    let w = window(WindowStatus::Claim);
    let now = base() + Duration::days(6);
    let view = RegistrationView::derive(Some(&w), Some(WindowStatus::Claim), 12_345_000, &agix_stake(), now).unwrap();
    assert_eq!(view.rewards_text.as_deref(), Some("12.345 NTX"));
    assert_eq!(view.headline(3, 4), "Vesting claim window 3 / 4 claim:");
}

#[test]
fn test_stake_button_disabled_iff_not_stakable() {
    let w = window(WindowStatus::Claim);
    let now = base() + Duration::days(6);
    for is_stakable in [true, false] {
        let stake = StakeInfo {
            is_stakable,
            ..agix_stake()
        };
        let view = RegistrationView::derive(Some(&w), Some(WindowStatus::Claim), 0, &stake, now).unwrap();
        assert_eq!(
            view.actions,
            ActionSurface::Claim {
                stake_enabled: is_stakable
            }
        );
    }
}

#[test]
fn test_alert_visibility() {
    assert!(!UiAlert::new(AlertSeverity::Success, "").is_visible());
    let alert = UiAlert::new(AlertSeverity::Warning, "Claim window closes soon");
    assert!(alert.is_visible());
    assert_eq!(alert.severity.css_value(), "warning");
}

#[test]
fn test_modal_numeric_fields() {
    let stake = agix_stake();
    assert_eq!(stake.stakable_display(), "5 AGIX");
    assert_eq!(stake.claimable_display(), "2");
}

// ----------------------------------------------------------------------------
// Dispatch properties
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_register_invokes_once_and_clears_loader_on_failure() {
    let loading = Rc::new(RefCell::new(Vec::new()));
    let calls = Rc::new(Cell::new(0));

    for outcome in [Ok(()), Err(ActionError::Rejected("already registered".to_string()))] {
        loading.borrow_mut().clear();
        calls.set(0);

        let result = run_with_loader(
            {
                let loading = loading.clone();
                move |v| loading.borrow_mut().push(v)
            },
            || {
                let calls = calls.clone();
                let outcome = outcome.clone();
                async move {
                    calls.set(calls.get() + 1);
                    outcome
                }
            },
        )
        .await;

        assert_eq!(result, outcome);
        assert_eq!(calls.get(), 1);
        assert_eq!(*loading.borrow(), vec![true, false]);
    }
}

#[tokio::test]
async fn test_cancel_and_confirm_in_stake_modal() {
    let modal = Rc::new(Cell::new(StakeModal::Closed));
    let stake_calls = Rc::new(Cell::new(0));

    // Stake button opens the modal, Cancel toggles it shut.
    let mut state = modal.get();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    modal.set(state);
    assert_eq!(modal.get(), StakeModal::Closed);
    assert_eq!(stake_calls.get(), 0);

    // Re-open and confirm.
    let mut state = modal.get();
    state.toggle();
    modal.set(state);

    let result: Result<(), ActionError> = auto_stake(
        {
            let modal = modal.clone();
            move || modal.set(StakeModal::Closed)
        },
        |_| {},
        || {
            let stake_calls = stake_calls.clone();
            async move {
                stake_calls.set(stake_calls.get() + 1);
                Ok(())
            }
        },
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(modal.get(), StakeModal::Closed);
    assert_eq!(stake_calls.get(), 1);
}

// ----------------------------------------------------------------------------
// Schedule
// ----------------------------------------------------------------------------

#[test]
fn test_schedule_feeds_view() {
    let mut first = window(WindowStatus::Upcoming);
    first.airdrop_window_id = 1;
    first.airdrop_window_order = 1;
    let second = window(WindowStatus::Upcoming);
    let schedule = AirdropSchedule::new(vec![second, first]).unwrap();

    let now = base() + Duration::days(1);
    let active = schedule.resolve(now).unwrap();
    assert_eq!(active.airdrop_window_id, 1);
    assert_eq!(active.airdrop_window_status, WindowStatus::Registration);
    assert_eq!(schedule.position(&active), Some(1));

    let end = AirdropSchedule::countdown_target(&active, active.airdrop_window_status);
    assert_eq!(format_standard_date(end), "04 Sep 2026, 12:00 UTC");

    let view = RegistrationView::derive(
        Some(&active),
        Some(active.airdrop_window_status),
        0,
        &agix_stake(),
        now,
    )
    .unwrap();
    assert_eq!(view.badge, "Registration Open");
    assert_eq!(view.actions, ActionSurface::Schedule { show_register: true });
}
