//! Connection pool management

mod postgres;

pub use postgres::PoolSettings;
pub use sqlx::PgPool;
