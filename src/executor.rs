use async_trait::async_trait;
use sqlx::{
    mysql::{MySql, MySqlPool},
    types::Json,
};

use crate::{
    model::MatchModel,
    schema::{Match, SqlValue},
};

/// Result of a statement that does not return records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub rows_affected: u64,
    pub last_insert_id: u64,
}

/// Runs parameterized SQL against the `score` table. Placeholders are `?`
/// and are bound positionally from `params`.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Match>, sqlx::Error>;

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<QueryOutcome, sqlx::Error>;
}

macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for param in $params {
            query = match param {
                SqlValue::Int(v) => query.bind(*v),
                SqlValue::Text(v) => query.bind(v.clone()),
                SqlValue::List(v) => query.bind(Json(v.clone())),
                SqlValue::Time(v) => query.bind(*v),
                SqlValue::Date(v) => query.bind(*v),
            };
        }
        query
    }};
}

pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for MySqlExecutor {
    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Match>, sqlx::Error> {
        let rows: Vec<MatchModel> = bind_params!(sqlx::query_as::<MySql, MatchModel>(sql), params)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Match::from).collect())
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<QueryOutcome, sqlx::Error> {
        let res = bind_params!(sqlx::query::<MySql>(sql), params)
            .execute(&self.pool)
            .await?;

        Ok(QueryOutcome {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_id(),
        })
    }
}
