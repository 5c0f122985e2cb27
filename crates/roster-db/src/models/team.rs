//! Team database model

use sqlx::FromRow;

/// Database model for the teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub name: String,
}
