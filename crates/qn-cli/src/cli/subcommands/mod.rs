pub mod auth;
pub mod view;

pub use auth::AuthCommands;
pub use view::ViewCommands;
