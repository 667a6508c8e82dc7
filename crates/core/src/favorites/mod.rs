//! Favorites module - favorite transfer targets and their display mapping.

mod favorites_model;
mod favorites_service;

// Re-export the public interface
pub use favorites_model::{
    display_items, FavoriteDisplayItem, FavoriteItem, FavoriteListResult, TransactionType,
};
pub use favorites_service::FavoriteService;
