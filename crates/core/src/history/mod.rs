//! History module - persisted price readings, store trait and JSON store.

mod history_model;
mod history_repository;
mod history_traits;

pub use history_model::HistoryEntry;
pub use history_repository::JsonHistoryRepository;
pub use history_traits::HistoryRepositoryTrait;
