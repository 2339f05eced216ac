//! HTTP mapping for `DemoSiteError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use demosite_core::error::{ClientCode, DemoSiteError};

/// Handler-side error. Converts into a plain-text failure response.
#[derive(Debug)]
pub struct PageError(pub DemoSiteError);

impl From<DemoSiteError> for PageError {
    fn from(e: DemoSiteError) -> Self {
        Self(e)
    }
}

/// Marker attached to failure responses so the access log can flag them.
#[derive(Debug, Clone, Copy)]
pub struct HandlerFailure(pub ClientCode);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let (status, body) = match &self.0 {
            DemoSiteError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            DemoSiteError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad request".to_string()),
            DemoSiteError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload too large".to_string())
            }
            DemoSiteError::Storage(_) | DemoSiteError::Probe(_) | DemoSiteError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(code = code.as_str(), error = %self.0, "request failed");
        } else {
            tracing::debug!(code = code.as_str(), error = %self.0, "request rejected");
        }

        let mut res = (status, body).into_response();
        res.extensions_mut().insert(HandlerFailure(code));
        res
    }
}
