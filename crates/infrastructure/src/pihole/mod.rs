pub mod client;
pub mod local_ip;
pub mod setup_vars;
pub mod summary;

pub use client::PiholeApiClient;
pub use local_ip::detect_local_ip;
pub use setup_vars::{parse_token, read_token};
pub use summary::SummaryResponse;
