use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use tracing::instrument;

use crate::entities::transaction;

/// Look up a single transaction by primary key.
///
/// Yields `Ok(None)` when no row matches; only driver failures are errors.
#[instrument(name = "find_transaction", skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<transaction::Model>, DbErr> {
    transaction::Entity::find_by_id(id).one(db).await
}
