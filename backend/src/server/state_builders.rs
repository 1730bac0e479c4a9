//! Builders for the HTTP state port bundle.

use std::sync::Arc;

use actix_web::web;

use crate::domain::HotelsService;
use crate::domain::ports::{FixtureAccessTokenVerifier, FixtureHotelsQuery};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DieselAccessTokenVerifier, DieselEnrollmentRepository, DieselHotelRepository,
    DieselTicketRepository,
};

use super::ServerConfig;

/// Build the handler state: Diesel-backed ports when a pool is configured,
/// fixtures otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState {
            hotels: Arc::new(HotelsService::new(
                Arc::new(DieselEnrollmentRepository::new(pool.clone())),
                Arc::new(DieselTicketRepository::new(pool.clone())),
                Arc::new(DieselHotelRepository::new(pool.clone())),
            )),
            access_tokens: Arc::new(DieselAccessTokenVerifier::new(pool.clone())),
        },
        None => HttpState {
            hotels: Arc::new(FixtureHotelsQuery),
            access_tokens: Arc::new(FixtureAccessTokenVerifier),
        },
    };
    web::Data::new(state)
}
