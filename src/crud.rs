use std::sync::Arc;

use crate::{
    error::{RepoError, ValidationError},
    executor::QueryExecutor,
    schema::{Envelope, Match, Meta, SqlValue},
};

const SELECT_PAGE: &str = "SELECT * FROM score LIMIT ?, ?";
const SELECT_BY_ID: &str = "SELECT * FROM score WHERE matchId = ?";
const DELETE_BY_ID: &str = "DELETE FROM score WHERE matchId = ?";

/// `field = ?` fragments and their bind values, built from one ordered field
/// list so that fragment `i` always pairs with value `i`.
#[derive(Debug, PartialEq)]
pub struct SetClause {
    pub fragments: String,
    pub values: Vec<SqlValue>,
}

impl SetClause {
    pub fn from_match(m: &Match) -> Result<Self, ValidationError> {
        let fields = m.fields();
        if fields.is_empty() {
            return Err(ValidationError::NoFields);
        }

        let fragments = fields
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let values = fields.into_iter().map(|(_, value)| value).collect();

        Ok(Self { fragments, values })
    }

    /// Bind values followed by the row key, matching `SET ... WHERE matchId = ?`.
    pub fn values_with_key(self, match_id: i64) -> Vec<SqlValue> {
        let mut values = self.values;
        values.push(SqlValue::Int(match_id));
        values
    }
}

/// Rows to skip before `page`. Fails when the offset does not fit a bind
/// parameter.
fn offset(page: u32, page_size: u32) -> Result<i64, ValidationError> {
    i64::from(page.saturating_sub(1))
        .checked_mul(i64::from(page_size))
        .ok_or(ValidationError::PageOutOfRange { page, page_size })
}

#[derive(Clone)]
pub struct MatchRepository {
    db: Arc<dyn QueryExecutor>,
}

impl MatchRepository {
    pub fn new(db: Arc<dyn QueryExecutor>) -> Self {
        Self { db }
    }

    /// One page of matches in storage order. Pages start at 1; lower values
    /// are treated as the first page.
    pub async fn list(&self, page: u32, page_size: u32) -> Result<Envelope<Match>, RepoError> {
        if page_size == 0 {
            return Err(ValidationError::PageSize.into());
        }
        let page = page.max(1);
        let offset = offset(page, page_size)?;

        tracing::debug!(sql = SELECT_PAGE, page, page_size, "listing matches");
        let rows = self
            .db
            .fetch(
                SELECT_PAGE,
                &[
                    SqlValue::Int(offset),
                    SqlValue::Int(page_size.into()),
                ],
            )
            .await?;

        Ok(Envelope::new(
            rows,
            Meta {
                page: Some(page),
                page_size: Some(page_size),
                ..Default::default()
            },
        ))
    }

    pub async fn get_by_id(&self, match_id: i64) -> Result<Envelope<Match>, RepoError> {
        tracing::debug!(sql = SELECT_BY_ID, match_id, "fetching match");
        let rows = self
            .db
            .fetch(SELECT_BY_ID, &[SqlValue::Int(match_id)])
            .await?;

        Ok(Envelope::new(rows, Meta::default()))
    }

    /// Inserts the present fields and returns the match with its generated id.
    /// Any `matchId` on the input is ignored.
    pub async fn create(&self, mut m: Match) -> Result<Envelope<Match>, RepoError> {
        let set = SetClause::from_match(&m)?;
        let sql = format!("INSERT INTO score SET {}", set.fragments);

        tracing::debug!(%sql, "creating match");
        let res = self.db.execute(&sql, &set.values).await?;

        let insert_id = res.last_insert_id as i64;
        m.match_id = Some(insert_id);
        tracing::info!(match_id = insert_id, "match created");

        Ok(Envelope::new(
            vec![m],
            Meta {
                insert_id: Some(insert_id),
                ..Default::default()
            },
        ))
    }

    /// Writes every present non-key field of `m` to the row with its
    /// `matchId`. Serves both full and partial updates.
    pub async fn update(&self, m: Match) -> Result<Envelope<Match>, RepoError> {
        let match_id = m.match_id.ok_or(ValidationError::MissingId)?;
        let set = SetClause::from_match(&m)?;
        let sql = format!("UPDATE score SET {} WHERE matchId = ?", set.fragments);

        tracing::debug!(%sql, match_id, "updating match");
        let res = self.db.execute(&sql, &set.values_with_key(match_id)).await?;

        Ok(Envelope::empty(Meta {
            affected_rows: Some(res.rows_affected),
            ..Default::default()
        }))
    }

    pub async fn delete(&self, match_id: i64) -> Result<Envelope<Match>, RepoError> {
        tracing::debug!(sql = DELETE_BY_ID, match_id, "deleting match");
        let res = self
            .db
            .execute(DELETE_BY_ID, &[SqlValue::Int(match_id)])
            .await?;

        Ok(Envelope::empty(Meta {
            affected_rows: Some(res.rows_affected),
            ..Default::default()
        }))
    }
}
