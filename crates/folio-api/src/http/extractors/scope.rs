//! Per-request store handle.
//!
//! Extracting [`Db`] hands the handler its own [`RequestScope`]. No connection
//! is taken until the handler first writes, and the scope is dropped when the
//! handler returns, which gives the connection back on every exit path.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_infra::sqlite::scope::RequestScope;

use crate::state::AppState;

pub struct Db(pub RequestScope);

impl FromRequestParts<AppState> for Db {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Db(RequestScope::new(&state.db_pool)))
    }
}
