//! Banners module - home screen ad banners.

mod banners_model;
mod banners_service;

// Re-export the public interface
pub use banners_model::{Banner, BannerListResult};
pub use banners_service::BannerService;
