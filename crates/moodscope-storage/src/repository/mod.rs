//! Database repositories for each table.

pub mod history;

pub use history::HistoryRepo;
