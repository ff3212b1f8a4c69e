pub mod auth;
pub mod dispatch;
pub mod shell;
pub mod view;

mod shared;
