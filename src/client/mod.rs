//! Dashboard client.
//!
//! `SkillsClient` talks to the REST API; `Dashboard` owns the mirrored state
//! and reloads it wholesale after every mutation.

mod api_client;
mod dashboard;
mod state;

pub use api_client::*;
pub use dashboard::*;
pub use state::*;
