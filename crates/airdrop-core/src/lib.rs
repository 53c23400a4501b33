//! Core model for the airdrop registration portal.
//!
//! This crate holds everything the registration screen needs that is not
//! rendering: the airdrop window types, the window-phase resolver, token
//! unit formatting, the derived view model and the async action dispatchers
//! that drive loading indicators.
//!
//! Nothing here reads the wall clock. Every time-dependent function takes
//! `now` as a parameter so callers decide when time is sampled.
//!
//! # Quick Start
//!
//! ```ignore
//! use airdrop_core::{RegistrationView, ActionSurface};
//!
//! let view = RegistrationView::derive(Some(&window), Some(status), rewards, &stake_info, now)
//!     .expect("window present");
//!
//! if let ActionSurface::Claim { stake_enabled } = view.actions {
//!     // render the stake / claim buttons
//! }
//! ```

pub mod alert;
pub mod date;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod schedule;
pub mod stake;
pub mod units;
pub mod view;
pub mod window;

pub use alert::{AlertSeverity, UiAlert};
pub use date::{check_date_is_between, format_standard_date, Countdown};
pub use dispatch::{auto_stake, run_with_loader, LoaderGuard, StakeModal};
pub use error::{ActionError, PortalError};
pub use history::HistoryEvent;
pub use schedule::AirdropSchedule;
pub use stake::StakeInfo;
pub use units::{format_reward, format_token_amount, REWARD_TOKEN_SYMBOL, TOKEN_DECIMALS, TOKEN_SCALE};
pub use view::{headline, ActionSurface, RegistrationView};
pub use window::{AirdropWindow, WindowStatus};
