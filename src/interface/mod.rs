mod api;
mod provider;
mod scheduler;

pub use api::*;
pub use provider::*;
pub use scheduler::*;
