//! Flip-clock style countdown.

use airdrop_core::Countdown;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

/// Counts down to `end_date`.
///
/// With `now` supplied the parent drives the clock; without it the
/// countdown ticks itself once a second.
#[component]
pub fn FlipCountdown(end_date: DateTime<Utc>, now: Option<DateTime<Utc>>) -> Element {
    let mut local_now = use_signal(Utc::now);

    use_future(move || async move {
        if !ticks_itself(now) {
            return;
        }
        loop {
            sleep(Duration::from_secs(1)).await;
            local_now.set(Utc::now());
        }
    });

    let countdown = Countdown::until(end_date, now.unwrap_or_else(|| local_now()));
    let class = if countdown.is_elapsed() {
        "flip-countdown flip-countdown-elapsed"
    } else {
        "flip-countdown"
    };

    rsx! {
        div {
            class,
            for (value, unit) in countdown.segments() {
                div {
                    key: "{unit}",
                    class: "flip-segment",
                    span { class: "flip-value", "{value:02}" }
                    span { class: "flip-unit", "{unit}" }
                }
            }
        }
    }
}

/// A countdown only runs its own timer when the parent does not supply `now`.
fn ticks_itself(now: Option<DateTime<Utc>>) -> bool {
    now.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_clock_disables_local_timer() {
        assert!(ticks_itself(None));
        assert!(!ticks_itself(Some(Utc::now())));
    }
}
