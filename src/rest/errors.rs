use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde::Serialize;

/// Wire shape of every failure response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

#[derive(Debug, Display, Error)]
pub enum RegistryError {
    #[display("record not found")]
    NotFound,
    #[display("{}", _0.join(", "))]
    Validation(#[error(not(source))] Vec<String>),
    #[display("invalid csrf token")]
    InvalidCsrfToken,
    #[display("{_0}")]
    InternalServerError(#[error(not(source))] String),
}

impl RegistryError {
    fn error_messages(&self) -> Vec<String> {
        match self {
            RegistryError::NotFound => vec!["record not found".into()],
            RegistryError::Validation(messages) => messages.clone(),
            RegistryError::InvalidCsrfToken => vec!["invalid csrf token".into()],
            // detail stays in the log, the client gets a generic message
            RegistryError::InternalServerError(_) => vec!["internal server error".into()],
        }
    }
}

impl web::error::WebResponseError for RegistryError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        if let RegistryError::InternalServerError(detail) = self {
            error!("[InternalServerError] {detail}");
        }

        web::HttpResponse::build(self.status_code()).json(&ErrorBody {
            errors: self.error_messages(),
        })
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            RegistryError::NotFound => http::StatusCode::NOT_FOUND,
            RegistryError::Validation(_) => http::StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::InvalidCsrfToken => http::StatusCode::FORBIDDEN,
            RegistryError::InternalServerError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Store failures surface as validation errors when a constraint tripped,
/// otherwise as opaque internal errors. The named uniqueness messages come
/// from the api-layer pre-checks; this is the constraint-engine backstop.
pub fn from_repo_error(err: anyhow::Error) -> RegistryError {
    if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
        let message = db_err.message();

        if message.contains("FOREIGN KEY constraint failed") {
            return RegistryError::Validation(vec!["referenced record does not exist".into()]);
        }
        if message.contains("UNIQUE constraint failed") {
            return RegistryError::Validation(vec![
                "record violates a uniqueness constraint".into(),
            ]);
        }
        if message.contains("CHECK constraint failed") {
            return RegistryError::Validation(vec![
                "interval_days must be a positive integer".into(),
            ]);
        }
    }

    RegistryError::InternalServerError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(RegistryError::NotFound.status_code(), 404);
        assert_eq!(RegistryError::Validation(vec![]).status_code(), 422);
        assert_eq!(RegistryError::InvalidCsrfToken.status_code(), 403);
        assert_eq!(
            RegistryError::InternalServerError("boom".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = RegistryError::Validation(vec!["name is required".into(), "bad date".into()]);
        assert_eq!(err.to_string(), "name is required, bad date");
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = RegistryError::InternalServerError("db path /secret".into());
        assert_eq!(err.error_messages(), vec!["internal server error"]);
    }
}
