pub mod display;
pub mod status;

// Re-export use cases
pub use display::{ClearDisplayUseCase, GreetUseCase, PowerMode, WriteMessageUseCase};
pub use status::{CollectSnapshotUseCase, Flow, StatusController};
