use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adjusters::adjusters_errors::AdjusterError;
use crate::errors::{Error, Result, ValidationError};

pub const MIN_RATING_SCORE: i32 = 1;
pub const MAX_RATING_SCORE: i32 = 5;

#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::adjusters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Adjuster {
    pub id: String,
    pub name: String,
    pub office: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::adjusters)]
#[serde(rename_all = "camelCase")]
pub struct NewAdjuster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub office: Option<String>,
}

impl NewAdjuster {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }
}

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(Adjuster))]
#[diesel(table_name = crate::schema::adjuster_ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AdjusterRating {
    pub id: String,
    pub adjuster_id: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::adjuster_ratings)]
#[serde(rename_all = "camelCase")]
pub struct NewAdjusterRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub adjuster_id: String,
    pub score: i32,
    pub comment: Option<String>,
}

impl NewAdjusterRating {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATING_SCORE..=MAX_RATING_SCORE).contains(&self.score) {
            return Err(Error::Adjuster(AdjusterError::InvalidRating(format!(
                "Score must be between {} and {}, got {}",
                MIN_RATING_SCORE, MAX_RATING_SCORE, self.score
            ))));
        }
        Ok(())
    }
}

/// An adjuster with their derived rating stats. Computed on read,
/// never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatedAdjuster {
    pub adjuster: Adjuster,
    pub rating_count: usize,
    pub avg_score: f64,
}

impl RatedAdjuster {
    pub fn from_ratings(adjuster: Adjuster, ratings: &[AdjusterRating]) -> Self {
        let rating_count = ratings.len();
        let avg_score = if rating_count > 0 {
            ratings.iter().map(|r| r.score as f64).sum::<f64>() / rating_count as f64
        } else {
            0.0
        };
        Self {
            adjuster,
            rating_count,
            avg_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rating(score: i32) -> AdjusterRating {
        AdjusterRating {
            id: "r".to_string(),
            adjuster_id: "a".to_string(),
            score,
            comment: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn score_outside_range_is_rejected() {
        let mut new_rating = NewAdjusterRating {
            id: None,
            adjuster_id: "a".to_string(),
            score: 0,
            comment: None,
        };
        assert!(new_rating.validate().is_err());
        new_rating.score = 6;
        assert!(new_rating.validate().is_err());
        new_rating.score = 3;
        assert!(new_rating.validate().is_ok());
    }

    #[test]
    fn average_score_guards_empty_ratings() {
        let adjuster = Adjuster {
            id: "a".to_string(),
            name: "Pat Vega".to_string(),
            office: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        let rated = RatedAdjuster::from_ratings(adjuster.clone(), &[]);
        assert_eq!(rated.avg_score, 0.0);

        let rated = RatedAdjuster::from_ratings(adjuster, &[rating(4), rating(5)]);
        assert_eq!(rated.rating_count, 2);
        assert_eq!(rated.avg_score, 4.5);
    }
}
