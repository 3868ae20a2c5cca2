use chrono::{NaiveDate, NaiveTime};
use sqlx::types::Json;

use crate::schema::Match;

// For sqlx
#[derive(Debug, sqlx::FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct MatchModel {
    pub match_id: i64,
    pub activity: Option<String>,
    pub team1: Option<String>,
    pub players_team1: Option<Json<Vec<String>>>,
    pub score_team1: Option<i32>,
    pub team2: Option<String>,
    pub players_team2: Option<Json<Vec<String>>>,
    pub score_team2: Option<i32>,
    pub speeltijd: Option<NaiveTime>,
    pub datum: Option<NaiveDate>,
}

impl From<MatchModel> for Match {
    fn from(m: MatchModel) -> Self {
        Self {
            match_id: Some(m.match_id),
            activity: m.activity,
            team1: m.team1,
            players_team1: m.players_team1.map(|p| p.0),
            score_team1: m.score_team1,
            team2: m.team2,
            players_team2: m.players_team2.map(|p| p.0),
            score_team2: m.score_team2,
            speeltijd: m.speeltijd,
            datum: m.datum,
        }
    }
}
