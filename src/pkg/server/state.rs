use sqlx::PgPool;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres, Transaction};
use std::sync::Arc;

use crate::{conf::settings, prelude::Result};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
        })
    }
}

pub trait GetTxn {
    fn begin_txn(
        &self,
    ) -> impl std::future::Future<Output = Result<Transaction<'static, Postgres>>> + Send;
}

impl GetTxn for Arc<PgPool> {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}
