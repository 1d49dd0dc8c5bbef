//! Service Module
//!
//! The generation/persistence orchestrator, the tag service and the request
//! counting decorator.

mod counting;
mod passwords;
mod tags;

pub use counting::CountingPasswordService;
pub use passwords::{PasswordGeneration, PasswordService};
pub use tags::TagService;
