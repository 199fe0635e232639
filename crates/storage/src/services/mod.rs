pub mod entry_store;
pub mod leaderboard;
pub mod period;
pub mod scoring;
pub mod seed;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use entry_store::EntryStore;
pub use leaderboard::compute_leaderboard;
pub use period::previous_window;
pub use summary::compute_summary;
