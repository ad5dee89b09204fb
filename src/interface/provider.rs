use crate::{ApiRequest, RawResponse, StdResult};

/// A trait for turning an endpoint descriptor into a raw API response.
///
/// Implementations own transport, authentication and low level errors; the
/// façade depends only on this capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Provider: Sync + Send {
    /// Performs the request described by the given descriptor.
    async fn request(&self, request: &ApiRequest) -> StdResult<RawResponse>;
}
