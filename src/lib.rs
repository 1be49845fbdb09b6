pub mod app;
pub mod config;
pub mod error;
pub mod greeting;
pub mod host;

pub use app::{mount, App, AppProps};
pub use error::{HostError, MountError};
pub use greeting::{greeting_markup, GreetingState, GreetingView};
pub use host::{display_name, HostGlobals};
