//! Access to the token payload verified by [`BearerAuth`](crate::middleware::BearerAuth).

use std::ops::Deref;

use actix_web::dev::Payload as RequestBody;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::Payload;
use crate::error::AppError;

/// The verified [`Payload`] of the current request.
///
/// Only resolvable behind `BearerAuth`; anywhere else it fails with
/// `MissingAuthorization`.
#[derive(Debug, Clone)]
pub struct AuthPayload(pub Payload);

impl AuthPayload {
    pub fn into_inner(self) -> Payload {
        self.0
    }
}

impl Deref for AuthPayload {
    type Target = Payload;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthPayload {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut RequestBody) -> Self::Future {
        let result = req
            .extensions()
            .get::<Payload>()
            .cloned()
            .map(AuthPayload)
            .ok_or_else(AppError::missing_authorization);
        ready(result)
    }
}
