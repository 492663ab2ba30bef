//! Application-level modules for the Smart Clipboard showcase.
//!
//! This module contains the application coordinators and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
#[cfg(test)]
mod mock_storage;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
#[cfg(test)]
pub(crate) use mock_storage::MockStorage;
