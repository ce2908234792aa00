use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Audit columns are `TIMESTAMP` (no time zone) holding UTC wall-clock time.
pub type AuditTimestamp = NaiveDateTime;

/// Database model for `compro.compro_assets`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Asset {
    pub ca_id: i64,
    pub ca_title: Option<String>,
    pub ca_tagline: Option<String>,
    pub ca_image: Option<String>,
    pub ca_image_carousel: Option<Vec<String>>,
    pub ca_subtitle: Option<String>,
    pub ca_link: Option<String>,
    pub ca_cc_id: Option<i64>,
    pub created_at: AuditTimestamp,
    pub created_by: String,
    pub updated_at: Option<AuditTimestamp>,
    pub updated_by: Option<String>,
}

/// Asset row left-joined with its category; `cc_id`/`cc_name` are `None`
/// for uncategorized assets.
#[derive(Debug, Clone, FromRow)]
pub struct AssetWithCategory {
    #[sqlx(flatten)]
    pub asset: Asset,
    pub cc_id: Option<i64>,
    pub cc_name: Option<String>,
}

/// Validated content fields shared by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetContent {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub image: Option<String>,
    pub image_carousel: Vec<String>,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    pub category_id: Option<i64>,
}

/// Insert input. `created_at` is left to the column default.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub content: AssetContent,
    pub created_by: String,
}

/// Full replacement of the content fields plus the update audit pair.
#[derive(Debug, Clone)]
pub struct AssetChanges {
    pub content: AssetContent,
    pub updated_at: AuditTimestamp,
    pub updated_by: String,
}

impl Asset {
    /// Produce the record to save after applying `changes`.
    ///
    /// Identity and the `created_*` pair always come from `self`.
    pub fn with_changes(self, changes: AssetChanges) -> Asset {
        let AssetContent {
            title,
            tagline,
            image,
            image_carousel,
            subtitle,
            link,
            category_id,
        } = changes.content;

        Asset {
            ca_id: self.ca_id,
            ca_title: title,
            ca_tagline: tagline,
            ca_image: image,
            ca_image_carousel: Some(image_carousel),
            ca_subtitle: subtitle,
            ca_link: link,
            ca_cc_id: category_id,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: Some(changes.updated_at),
            updated_by: Some(changes.updated_by),
        }
    }
}
