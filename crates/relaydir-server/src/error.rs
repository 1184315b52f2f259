//! Error taxonomy shared by both protocol front ends.
//!
//! Every operation failure is classified into one [`AppError`] variant, and
//! each variant has exactly one gRPC status code and one HTTP status code.
//! Clients on either protocol observe the same classification for the same
//! failure.

use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;

use relaydir_persistence::RepoError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("country was not found")]
    CountryNotFound,
    #[error("credential is not valid")]
    CredentialInvalid,
    #[error("receipt was rejected with status {0}")]
    ReceiptRejected(i64),
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),
    #[error("{0}")]
    Unknown(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::CountryNotFound => AppError::CountryNotFound,
            RepoError::Db(e) => AppError::Unknown(e.to_string()),
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        match err {
            AppError::CountryNotFound => tonic::Status::not_found(message),
            AppError::CredentialInvalid => tonic::Status::unauthenticated(message),
            AppError::ReceiptRejected(_) => tonic::Status::invalid_argument(message),
            AppError::UpstreamFetch(_) => tonic::Status::unavailable(message),
            AppError::Unknown(_) => tonic::Status::unknown(message),
        }
    }
}

/// JSON error envelope: `{"error": {"message": ..., "code": ...}}`.
/// `code` duplicates the HTTP status so clients reading only the body can
/// still classify the failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    code: u16,
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CountryNotFound => StatusCode::NOT_FOUND,
            AppError::CredentialInvalid => StatusCode::UNAUTHORIZED,
            AppError::ReceiptRejected(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFetch(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                code: status.as_u16(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::error::ResponseError;

    use super::*;

    #[test]
    fn repo_not_found_maps_to_not_found() {
        let err = AppError::from(RepoError::CountryNotFound);
        assert!(matches!(err, AppError::CountryNotFound));
    }

    #[test]
    fn grpc_and_http_classifications_agree() {
        let cases: Vec<(AppError, tonic::Code, StatusCode)> = vec![
            (
                AppError::CountryNotFound,
                tonic::Code::NotFound,
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::CredentialInvalid,
                tonic::Code::Unauthenticated,
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::ReceiptRejected(21002),
                tonic::Code::InvalidArgument,
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UpstreamFetch("timed out".to_string()),
                tonic::Code::Unavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Unknown("boom".to_string()),
                tonic::Code::Unknown,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, grpc_code, http_status) in cases {
            assert_eq!(err.status_code(), http_status);
            let status = tonic::Status::from(err);
            assert_eq!(status.code(), grpc_code);
        }
    }

    #[test]
    fn http_body_carries_message_and_code() {
        let err = AppError::CountryNotFound;
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body =
            futures::executor::block_on(actix_web::body::to_bytes(resp.into_body())).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "country was not found");
        assert_eq!(json["error"]["code"], 404);
    }
}
