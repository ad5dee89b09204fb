mod api_rest;
mod provider_http;
mod provider_stub;
mod scheduler_inline;
mod scheduler_runtime;

pub use api_rest::*;
pub use provider_http::*;
pub use provider_stub::*;
pub use scheduler_inline::*;
pub use scheduler_runtime::*;
