use serde_json::json;
use tracing::debug;

use actix_web::web::Path;
use actix_web::{HttpResponse, Responder, get};

use services::transactions;

use crate::error::Error;
use crate::middleware::RequestConnection;

#[get("/{id}")]
pub async fn get(conn: RequestConnection, id: Path<i64>) -> Result<impl Responder, Error> {
    let id = id.into_inner();

    // The row is looked up but not returned; callers always get the same acknowledgement.
    let transaction = transactions::find_by_id(&conn, id)
        .await
        .map_err(Error::Query)?;
    debug!(id, found = transaction.is_some(), "transaction lookup finished");

    Ok(HttpResponse::Ok().json(json!({ "message": "Hello World" })))
}
