//! Lazy table creation.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::post::Entity as PostEntity;

/// Create the `posts` table if it does not exist yet.
///
/// Existing tables are left untouched; there is no migration of an older schema.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create = schema.create_table_from_entity(PostEntity);
    create.if_not_exists();

    db.execute(backend.build(&create)).await?;
    tracing::info!("Table `posts` ready");

    Ok(())
}
