use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct KeyValueRecord {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}
