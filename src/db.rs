use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use crate::config::Config;

pub async fn init_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    info!(max_connections = config.db_max_connections, "Database pool ready");
    Ok(pool)
}

pub async fn close_db(pool: MySqlPool) {
    pool.close().await;
    info!("Database pool closed");
}
