use std::num::ParseIntError;

use axum::response::{IntoResponse, Response};

use crate::utils::error_chain_fmt;

// 두 경우 모두 클라이언트 오류이다. => 400
// 현재 요청의 해석은 여기서 끝나고 부분 결과는 돌려주지 않는다.
#[derive(thiserror::Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Required request parameter '{0}' is not present.")]
    MissingParameter(String),

    #[error("Request parameter '{name}' has an invalid value '{value}'.")]
    TypeCoercion {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl std::fmt::Debug for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ResolutionError {
    fn into_response(self) -> Response {
        tracing::Span::current()
            .record("error", tracing::field::display(&self))
            .record("error_detail", tracing::field::debug(&self));
        tracing::warn!(error.resolution = %self, error.resolution.details = ?self);

        http::StatusCode::BAD_REQUEST.into_response()
    }
}

impl ResolutionError {
    pub fn name(&self) -> &str {
        match self {
            ResolutionError::MissingParameter(name) => name,
            ResolutionError::TypeCoercion { name, .. } => name,
        }
    }
}
