pub mod button_listener;
pub mod refresh;
pub mod runner;

pub use button_listener::{ButtonListenerJob, Debouncer};
pub use refresh::RefreshJob;
pub use runner::JobRunner;
