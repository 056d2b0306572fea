use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use super::schema::Schema;

/// Connect to `database_url` and create any table of `schema` that is missing.
///
/// The pool holds a single connection: the application is the only writer,
/// and `sqlite::memory:` databases are private to the connection that opened
/// them.
pub async fn init_db(database_url: &str, schema: &Schema) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    tracing::info!("Connected to {}", database_url);

    schema.create_all(&db).await?;

    Ok(db)
}

pub async fn close_db(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    tracing::info!("Database connection closed");
    Ok(())
}
