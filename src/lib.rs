pub mod app;
pub mod config;
pub mod entry;
pub mod error;
pub mod input;
pub mod io;
pub mod message;
pub mod pins;
pub mod shortcut;
pub mod state;
pub mod style;
pub mod view;

pub use app::Axiom;
pub use config::Config;
pub use message::Message;
