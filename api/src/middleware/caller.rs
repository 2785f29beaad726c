//! Caller identity taken from the `X-Sharer-User-Id` header.
//!
//! The header is trusted as-is: there is no credential behind it, so any
//! client can act as any user.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use si_core::domain::entities::Id;

use crate::handlers::ApiError;

pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Numeric id of the user issuing the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub Id);

impl CallerId {
    pub fn id(&self) -> Id {
        self.0
    }

    fn from_header(req: &HttpRequest) -> Result<Self, ApiError> {
        let value = req
            .headers()
            .get(USER_ID_HEADER)
            .ok_or_else(|| ApiError::BadRequest(format!("Missing {} header", USER_ID_HEADER)))?;

        value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<Id>().ok())
            .map(CallerId)
            .ok_or_else(|| ApiError::BadRequest(format!("{} header must be a numeric user id", USER_ID_HEADER)))
    }
}

impl FromRequest for CallerId {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_header(req))
    }
}
