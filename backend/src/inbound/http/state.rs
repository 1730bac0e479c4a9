//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccessTokenVerifier, HotelsQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::ports::{FixtureAccessTokenVerifier, FixtureHotelsQuery};
/// use backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     hotels: Arc::new(FixtureHotelsQuery),
///     access_tokens: Arc::new(FixtureAccessTokenVerifier),
/// };
/// let _hotels = state.hotels.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Hotel read operations gated by the eligibility policy.
    pub hotels: Arc<dyn HotelsQuery>,
    /// Bearer-token resolution used by the authentication extractor.
    pub access_tokens: Arc<dyn AccessTokenVerifier>,
}
