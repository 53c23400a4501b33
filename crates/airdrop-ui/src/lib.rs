//! Dioxus components for the airdrop registration screen.
//!
//! `AirdropRegistration` is purely presentational: every piece of durable
//! state arrives as a prop and every user intent leaves as a callback. The
//! only state it owns is two loading flags and the stake modal.

pub mod action;
pub mod alert;
pub mod countdown;
pub mod history;
pub mod loading_button;
pub mod registration;
pub mod stake_modal;
pub mod status_badge;
pub mod theme;

pub use action::{ActionFuture, AsyncAction};
pub use alert::AlertBanner;
pub use countdown::FlipCountdown;
pub use history::History;
pub use loading_button::{ButtonVariant, LoadingButton};
pub use registration::AirdropRegistration;
pub use stake_modal::StakeModalOverlay;
pub use status_badge::StatusBadge;
pub use theme::{Theme, ThemeSwitcher, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and component styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
