//! Game logic: catalog, difficulty pools, feedback comparator, session manager.

mod catalog;
mod feedback;
mod manager;
mod pool;

pub use catalog::PlayerCatalog;
pub use feedback::compare;
pub use manager::{GameManager, Notifier};
pub use pool::{
    pool_for, top_clubs, PoolConfig, DEFAULT_RETIRED_MAJORS_THRESHOLD, DEFAULT_TOP_CLUB_CUTOFF,
};
