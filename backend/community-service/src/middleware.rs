//! Request extractors shared by the HTTP handlers

use actix_web::{Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Header carrying the caller's viewer identity
pub const VIEWER_HEADER: &str = "X-Viewer-Id";

pub const ANONYMOUS_VIEWER: &str = "anonymous";

/// Viewer identity used to key votes, feed sessions and pending submissions.
///
/// Read from `X-Viewer-Id`; a missing or blank header falls back to
/// [`ANONYMOUS_VIEWER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer(pub String);

impl Viewer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_header(req: &HttpRequest) -> Self {
        let id = req
            .headers()
            .get(VIEWER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(ANONYMOUS_VIEWER);
        Viewer(id.to_string())
    }
}

impl FromRequest for Viewer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(Viewer::from_header(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_viewer_from_header() {
        let req = TestRequest::default()
            .insert_header((VIEWER_HEADER, "  alice "))
            .to_http_request();
        assert_eq!(Viewer::from_header(&req).as_str(), "alice");
    }

    #[test]
    fn test_missing_or_blank_header_is_anonymous() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(Viewer::from_header(&req).as_str(), ANONYMOUS_VIEWER);

        let req = TestRequest::default()
            .insert_header((VIEWER_HEADER, "   "))
            .to_http_request();
        assert_eq!(Viewer::from_header(&req).as_str(), ANONYMOUS_VIEWER);
    }
}
