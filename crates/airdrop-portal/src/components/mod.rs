//! UI components for the airdrop portal.

mod app;
mod schedule;

pub use app::*;
pub use schedule::*;
