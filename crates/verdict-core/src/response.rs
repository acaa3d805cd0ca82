//! Conversion of an outcome into an HTTP response.
//!
//! The response body is the outcome's JSON body with
//! `Content-Type: application/json`. The status is the outcome's HTTP status
//! code, with one exception: a data-carrying outcome whose data is absent (or
//! encodes to JSON `null`) answers `404 Not Found` while
//! [`ResultOptions::return_not_found_when_data_is_null`](crate::ResultOptions::return_not_found_when_data_is_null)
//! is enabled, which is the default.
//!
//! Conversion consumes the outcome, so it cannot be changed after the
//! response has been produced.
//!
//! # Example
//!
//! ```
//! use verdict_core::Outcome;
//! use http::StatusCode;
//!
//! let response = Outcome::success_with(vec!["a", "b"])
//!     .with_http_status_code(StatusCode::CREATED)
//!     .into_response()
//!     .unwrap();
//!
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(&response.body()[..], br#"{"Succeeded":true,"Data":["a","b"]}"#);
//! ```

use crate::body::serializes_to_null;
use crate::error::VerdictResult;
use crate::outcome::Outcome;
use bytes::Bytes;
use http::{header, Response, StatusCode};
use serde::Serialize;

impl<T: Serialize> Outcome<T> {
    /// Returns the status [`into_response`](Self::into_response) would answer with.
    pub fn response_status(&self) -> StatusCode {
        if !self.carries_data() || !self.options().return_not_found_when_data_is_null() {
            return self.http_status_code();
        }

        let data_is_null = self.data().map_or(true, serializes_to_null);
        if data_is_null {
            tracing::debug!(
                status = self.http_status_code().as_u16(),
                "data is absent, answering 404"
            );
            return StatusCode::NOT_FOUND;
        }

        self.http_status_code()
    }

    /// Converts the outcome into an HTTP response.
    ///
    /// The body is exactly what [`to_json`](Self::to_json) produces.
    ///
    /// # Errors
    ///
    /// Returns `VerdictError::Serialization` if the data cannot be encoded, or
    /// `VerdictError::ResponseBuild` if the response cannot be assembled.
    pub fn into_response(self) -> VerdictResult<Response<Bytes>> {
        let body = self.to_json()?;
        let status = self.response_status();

        let response = Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;
        Ok(response)
    }

    /// Converts the outcome into an HTTP response for async callers.
    ///
    /// The conversion is synchronous; the returned future is ready on first
    /// poll.
    ///
    /// # Errors
    ///
    /// Same as [`into_response`](Self::into_response).
    pub async fn into_response_async(self) -> VerdictResult<Response<Bytes>> {
        self.into_response()
    }
}
