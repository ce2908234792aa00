use sqlx::FromRow;

/// Database model for `compro.compro_category` (the columns this service reads)
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub cc_id: i64,
    pub cc_name: String,
}
