use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct Pagination {
    pub page: Option<u32>,
}

/// Updatable columns of the `score` table, in the order their SET fragments
/// and parameters are emitted. `matchId` is deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Activity,
    Team1,
    PlayersTeam1,
    ScoreTeam1,
    Team2,
    PlayersTeam2,
    ScoreTeam2,
    Speeltijd,
    Datum,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Column::Activity => "activity",
            Column::Team1 => "team1",
            Column::PlayersTeam1 => "playersTeam1",
            Column::ScoreTeam1 => "scoreTeam1",
            Column::Team2 => "team2",
            Column::PlayersTeam2 => "playersTeam2",
            Column::ScoreTeam2 => "scoreTeam2",
            Column::Speeltijd => "speeltijd",
            Column::Datum => "datum",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bind parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    List(Vec<String>),
    Time(NaiveTime),
    Date(NaiveDate),
}

/// A full or partial match. Every field is optional so the same shape serves
/// inserts, partial updates and rows read back from the table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players_team1: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_team1: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players_team2: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_team2: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speeltijd: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<NaiveDate>,
}

impl Match {
    /// Present non-key fields paired with their values, in [`Column`] order.
    ///
    /// This is the only place the field order is decided: SET fragments and
    /// the parameter list are both derived from the returned pairs.
    pub fn fields(&self) -> Vec<(Column, SqlValue)> {
        let mut fields = Vec::new();

        if let Some(v) = &self.activity {
            fields.push((Column::Activity, SqlValue::Text(v.clone())));
        }
        if let Some(v) = &self.team1 {
            fields.push((Column::Team1, SqlValue::Text(v.clone())));
        }
        if let Some(v) = &self.players_team1 {
            fields.push((Column::PlayersTeam1, SqlValue::List(v.clone())));
        }
        if let Some(v) = self.score_team1 {
            fields.push((Column::ScoreTeam1, SqlValue::Int(v.into())));
        }
        if let Some(v) = &self.team2 {
            fields.push((Column::Team2, SqlValue::Text(v.clone())));
        }
        if let Some(v) = &self.players_team2 {
            fields.push((Column::PlayersTeam2, SqlValue::List(v.clone())));
        }
        if let Some(v) = self.score_team2 {
            fields.push((Column::ScoreTeam2, SqlValue::Int(v.into())));
        }
        if let Some(v) = self.speeltijd {
            fields.push((Column::Speeltijd, SqlValue::Time(v)));
        }
        if let Some(v) = self.datum {
            fields.push((Column::Datum, SqlValue::Date(v)));
        }

        fields
    }
}

// For json response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, meta: Meta) -> Self {
        Self { data, meta }
    }

    /// Envelope for statements that return no records.
    pub fn empty(meta: Meta) -> Self {
        Self::new(Vec::new(), meta)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_rows: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match() -> Match {
        Match {
            match_id: Some(7),
            activity: Some("soccer".into()),
            team1: Some("Reds".into()),
            players_team1: Some(vec!["Ann".into(), "Bo".into()]),
            score_team1: Some(3),
            team2: Some("Blues".into()),
            players_team2: Some(vec!["Cy".into()]),
            score_team2: Some(1),
            speeltijd: NaiveTime::from_hms_opt(1, 30, 0),
            datum: NaiveDate::from_ymd_opt(2021, 5, 14),
        }
    }

    #[test]
    fn fields_follow_column_order_and_skip_match_id() {
        let columns: Vec<Column> = full_match().fields().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            columns,
            vec![
                Column::Activity,
                Column::Team1,
                Column::PlayersTeam1,
                Column::ScoreTeam1,
                Column::Team2,
                Column::PlayersTeam2,
                Column::ScoreTeam2,
                Column::Speeltijd,
                Column::Datum,
            ]
        );
    }

    #[test]
    fn fields_only_contains_present_values() {
        let m = Match {
            match_id: Some(1),
            score_team2: Some(4),
            team1: Some("Reds".into()),
            ..Default::default()
        };
        assert_eq!(
            m.fields(),
            vec![
                (Column::Team1, SqlValue::Text("Reds".into())),
                (Column::ScoreTeam2, SqlValue::Int(4)),
            ]
        );
    }

    #[test]
    fn deserializes_camel_case_partial_body() {
        let m: Match = serde_json::from_str(
            r#"{"team2":"Blues","playersTeam2":["Cy"],"speeltijd":"00:45:00","datum":"2021-05-14"}"#,
        )
        .unwrap();
        assert_eq!(m.team2.as_deref(), Some("Blues"));
        assert_eq!(m.players_team2, Some(vec!["Cy".to_string()]));
        assert_eq!(m.speeltijd, NaiveTime::from_hms_opt(0, 45, 0));
        assert_eq!(m.datum, NaiveDate::from_ymd_opt(2021, 5, 14));
        assert_eq!(m.match_id, None);
    }

    #[test]
    fn rejects_unknown_fields() {
        let res = serde_json::from_str::<Match>(r#"{"team1":"Reds","referee":"Dee"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn envelope_omits_absent_meta() {
        let env = Envelope::new(
            vec![Match {
                match_id: Some(1),
                team1: Some("Reds".into()),
                ..Default::default()
            }],
            Meta {
                page: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            serde_json::json!({"data": [{"matchId": 1, "team1": "Reds"}], "meta": {"page": 1}})
        );

        let empty: Envelope<Match> = Envelope::empty(Meta::default());
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            serde_json::json!({"data": [], "meta": {}})
        );
    }
}
