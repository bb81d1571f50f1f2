use axum::body::Body;
use axum::response::Response;
use http::header::{self, HeaderName, HeaderValue};
use http::StatusCode;

pub const SERVER_BANNER: &str = "Apache/2.2.22 (Ubuntu)";
pub const LAST_MODIFIED: &str = "Thu, 05 May 2011 11:46:42 GMT";
pub const ETAG: &str = "\"501b29-b1-4a285ed47404a\"";
pub const X_PAD: &str = "avoid browser bug";

pub const BODY: &[u8] = b"<html><body><h1>It works!</h1>
<p>This is the default web page for this server.</p>
<p>The web server software is running but no content has been added, yet.</p>
</body></html>
";

/// The one response this server ever sends: the Apache httpd default
/// landing page, banner and cache validators included. Built once at
/// startup and shared behind an `Arc`; header order is kept because it
/// shows on the wire.
pub struct DecoyTemplate {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: &'static [u8],
}

impl DecoyTemplate {
    pub fn apache_default() -> Self {
        let headers = vec![
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html"),
            ),
            (header::SERVER, HeaderValue::from_static(SERVER_BANNER)),
            (
                header::LAST_MODIFIED,
                HeaderValue::from_static(LAST_MODIFIED),
            ),
            (header::ETAG, HeaderValue::from_static(ETAG)),
            (header::ACCEPT_RANGES, HeaderValue::from_static("bytes")),
            (header::CONTENT_LENGTH, HeaderValue::from(BODY.len())),
            (header::VARY, HeaderValue::from_static("Accept-Encoding")),
            (
                HeaderName::from_static("x-pad"),
                HeaderValue::from_static(X_PAD),
            ),
        ];

        Self {
            status: StatusCode::OK,
            headers,
            body: BODY,
        }
    }

    pub fn to_response(&self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        for (name, value) in &self.headers {
            response.headers_mut().append(name.clone(), value.clone());
        }
        response
    }
}
