use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Query string extractor with Problem Details failures (400).
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map(|q| ValidatedQuery(q.into_inner()))
            .map_err(|e| {
                debug!(error = %e, "Query string parsing failed");
                AppError::bad_request(format!("Invalid query string: {e}"))
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Paging {
        page_id: u64,
        page_size: u64,
    }

    #[actix_web::test]
    async fn parses_numbers() {
        let req = TestRequest::get()
            .uri("/authors?page_id=2&page_size=5")
            .to_http_request();
        let q = ValidatedQuery::<Paging>::extract(&req).await.unwrap();
        assert_eq!((q.page_id, q.page_size), (2, 5));
    }

    #[actix_web::test]
    async fn missing_or_malformed_is_bad_request() {
        for uri in ["/authors", "/authors?page_id=1", "/authors?page_id=x&page_size=5"] {
            let req = TestRequest::get().uri(uri).to_http_request();
            let err = ValidatedQuery::<Paging>::extract(&req).await.unwrap_err();
            assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST, "{uri}");
        }
    }
}
