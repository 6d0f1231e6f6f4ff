use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let db_conn = Database::connect(&settings.database.url).await?;
    Migrator::up(&db_conn, None).await?;
    Ok(db_conn)
}
