use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use config::ConfigError;
use services::connection::failure_kind;
use services::sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("database connection unavailable")]
    Connection(#[source] DbErr),

    #[error("database query failed")]
    Query(#[source] DbErr),

    #[error("no database connection attached to request")]
    MissingConnection,

    #[error("application state not registered")]
    MissingState,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Driver connect errors can quote the database user.
            Error::Connection(e) => tracing::error!(kind = failure_kind(e), "{}", self),
            Error::Query(e) => tracing::error!(error = %e, "{}", self),
            _ => tracing::error!("{}", self),
        }

        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_keep_their_cause() {
        let err = Error::from(ConfigError::Message("database port must be an integer between 0 and 65535".into()));

        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: database port must be an integer between 0 and 65535"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn connection_error_body_omits_driver_message() {
        let err = Error::Connection(DbErr::Custom("password authentication failed for user \"ledger\"".into()));

        assert_eq!(err.to_string(), "database connection unavailable");
    }
}
