//! Configurator application state.

pub(crate) mod state;

pub use state::{AppState, AuthMode, GeneratedLink, UserSession, View};
