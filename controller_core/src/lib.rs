pub mod debug;
pub mod device;
pub mod error;
pub mod fullscreen;
pub mod options;
pub mod orientation;
pub mod runtime;
pub mod session;

#[cfg(test)]
mod fake;

pub use error::UiError;
pub use options::ControllerOptions;
pub use session::{setup_controller_ui, ConnectionCallbacks, ControllerSession, Runtime};
