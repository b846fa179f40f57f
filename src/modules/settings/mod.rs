// Settings module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AppSettings, SettingsUpdate};
pub use repositories::SettingsRepository;
pub use services::SettingsService;
