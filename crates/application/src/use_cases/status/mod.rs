mod collect_snapshot;
mod controller;
mod render;

pub use collect_snapshot::CollectSnapshotUseCase;
pub use controller::{Flow, StatusController};
pub use render::{render_notice, render_page, render_question};
