use std::future::{Ready, ready};
use std::ops::Deref;
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use services::connection::ScopedConnection;
use services::sea_orm::DatabaseConnection;
use tracing::debug;

use crate::app_state::AppState;
use crate::error::Error;

/// Database connection opened for the current request only.
#[derive(Clone)]
pub struct RequestConnection(Arc<DatabaseConnection>);

impl Deref for RequestConnection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for RequestConnection {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<RequestConnection>()
                .cloned()
                .ok_or(Error::MissingConnection),
        )
    }
}

/// Open a connection before the handler runs and close it once it is done.
///
/// Failing to connect aborts the request before any handler code executes.
pub async fn open_connection(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let state = req
        .app_data::<Data<AppState>>()
        .cloned()
        .ok_or(Error::MissingState)?;

    let scoped = ScopedConnection::open(state.connector.clone(), &state.connection_string)
        .await
        .map_err(Error::Connection)?;

    req.extensions_mut()
        .insert(RequestConnection(scoped.connection().clone()));
    debug!(path = %req.path(), "request bound to database connection");

    let res = next.call(req).await;

    if let Ok(res) = &res {
        res.request().extensions_mut().remove::<RequestConnection>();
    }
    scoped.close().await;

    res
}
