mod app_context;
mod config_warnings;

pub use app_context::{AppContext, build_storage, build_transport};
pub use config_warnings::warn_unconfigured;
