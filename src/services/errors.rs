use crate::forms::FieldErrors;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

pub const NOT_FOUND_MESSAGE: &str = "Produk tidak ditemukan";
pub const DELETED_MESSAGE: &str = "Produk berhasil dihapus";

/// Failures of a product operation. None of them has side effects.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// One or more payload fields broke their rule.
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    /// The store itself failed; surfaces as a generic server error.
    #[error("store failure: {0}")]
    Store(String),
}

impl From<FieldErrors> for ProductError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(errors) => json!({
                "message": errors.summary(),
                "errors": errors,
            }),
            Self::NotFound => json!({ "message": NOT_FOUND_MESSAGE }),
            Self::Store(_) => json!({ "message": "Server Error" }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
