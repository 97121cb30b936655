//! Bearer token authorization.
//!
//! Verifies `authorization: bearer <token>` with the state's `TokenMaker`
//! and stores the resulting [`Payload`] in the request extensions, where
//! [`AuthPayload`](crate::extractors::AuthPayload) picks it up. Rejections
//! are answered here as 401 Problem Details; the wrapped service is never
//! called. No per-resource decision is made.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::Payload;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

pub const BEARER_SCHEME: &str = "bearer";

pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware { service }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(&req) {
            Ok(payload) => {
                req.extensions_mut().insert(payload);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                // Rendered now, inside the request's trace scope.
                let res = req.error_response(err).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

fn authorize(req: &ServiceRequest) -> Result<Payload, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let token = match bearer_token(req.headers().get(header::AUTHORIZATION)) {
        Ok(token) => token,
        Err(err) => {
            security::token_rejected(&err.code().to_string());
            return Err(err);
        }
    };

    state.token_maker.verify_token(token).map_err(|e| {
        security::token_rejected(&e.to_string());
        AppError::from(e)
    })
}

/// Pull the token out of an `authorization` header value.
///
/// Checks, in order: present and non-blank, visible ASCII with at least two
/// whitespace-separated fields, scheme equal to `bearer` ignoring case.
pub fn bearer_token(value: Option<&HeaderValue>) -> Result<&str, AppError> {
    let raw = match value {
        Some(v) if !v.as_bytes().iter().all(u8::is_ascii_whitespace) => v,
        _ => return Err(AppError::missing_authorization()),
    };

    let text = raw
        .to_str()
        .map_err(|_| AppError::malformed_authorization())?;

    let mut fields = text.split_whitespace();
    let (scheme, token) = match (fields.next(), fields.next()) {
        (Some(scheme), Some(token)) => (scheme, token),
        _ => return Err(AppError::malformed_authorization()),
    };

    if scheme.to_ascii_lowercase() != BEARER_SCHEME {
        return Err(AppError::unsupported_scheme(scheme));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn code_for(value: Option<HeaderValue>) -> ErrorCode {
        bearer_token(value.as_ref()).unwrap_err().code()
    }

    #[test]
    fn absent_or_blank_is_missing() {
        assert_eq!(code_for(None), ErrorCode::MissingAuthorization);
        assert_eq!(
            code_for(Some(HeaderValue::from_static(""))),
            ErrorCode::MissingAuthorization
        );
        assert_eq!(
            code_for(Some(HeaderValue::from_static("   "))),
            ErrorCode::MissingAuthorization
        );
    }

    #[test]
    fn single_field_is_malformed() {
        assert_eq!(
            code_for(Some(HeaderValue::from_static("bearer"))),
            ErrorCode::MalformedAuthorization
        );
        assert_eq!(
            code_for(Some(HeaderValue::from_static("v4.local.abc"))),
            ErrorCode::MalformedAuthorization
        );
    }

    #[test]
    fn non_ascii_is_malformed() {
        let value = HeaderValue::from_bytes(b"bearer tok\xe9n").unwrap();
        assert_eq!(code_for(Some(value)), ErrorCode::MalformedAuthorization);
    }

    #[test]
    fn other_scheme_is_unsupported() {
        let err = bearer_token(Some(&HeaderValue::from_static("unsupported xyz"))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedAuthorizationScheme);
        assert_eq!(err.detail(), "unsupported authorization type unsupported");

        assert_eq!(
            code_for(Some(HeaderValue::from_static("Basic dXNlcjpwYXNz"))),
            ErrorCode::UnsupportedAuthorizationScheme
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        for value in ["bearer tok", "Bearer tok", "BEARER tok", "  bEaReR   tok  "] {
            let header = HeaderValue::from_str(value).unwrap();
            assert_eq!(bearer_token(Some(&header)).unwrap(), "tok", "{value}");
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let header = HeaderValue::from_static("bearer tok trailing");
        assert_eq!(bearer_token(Some(&header)).unwrap(), "tok");
    }
}
