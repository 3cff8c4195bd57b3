//! Host-side statistics helpers: per-page performance, reward derivation,
//! review scheduling, and achievements

mod achievements;
mod performance;
mod review;
mod rewards;

pub use achievements::*;
pub use performance::*;
pub use review::*;
pub use rewards::*;
