use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::assets::models::{AssetContent, AssetWithCategory, AuditTimestamp};
use crate::shared::constants::{
    MAX_CAROUSEL_IMAGES, MAX_IMAGE_LENGTH, MAX_LINK_LENGTH, MAX_SUBTITLE_LENGTH,
    MAX_TAGLINE_LENGTH, MAX_TITLE_LENGTH,
};
use crate::shared::validation::{discard_blank_entries, field_messages, validate_not_blank};

/// Request DTO for creating or updating an asset.
///
/// Updates replace every content field, so omitted fields are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssetPayloadDto {
    #[validate(
        custom(function = validate_not_blank, message = "title cannot be empty"),
        length(min = 1, max = MAX_TITLE_LENGTH, message = "title must be 1-500 characters")
    )]
    pub ca_title: Option<String>,

    #[validate(length(max = MAX_TAGLINE_LENGTH, message = "tagline must not exceed 1000 characters"))]
    pub ca_tagline: Option<String>,

    #[validate(length(max = MAX_IMAGE_LENGTH, message = "image must not exceed 2000 characters"))]
    pub ca_image: Option<String>,

    /// Carousel image references; blank entries are dropped before counting
    #[serde(default)]
    #[validate(length(max = MAX_CAROUSEL_IMAGES, message = "maximum 20 images"))]
    pub ca_image_carousel: Option<Vec<String>>,

    #[validate(length(max = MAX_SUBTITLE_LENGTH, message = "subtitle must not exceed 1000 characters"))]
    pub ca_subtitle: Option<String>,

    #[validate(length(max = MAX_LINK_LENGTH, message = "link must not exceed 2000 characters"))]
    pub ca_link: Option<String>,

    #[validate(range(min = 1, message = "category id must be a positive integer"))]
    pub ca_cc_id: Option<i64>,
}

impl AssetPayloadDto {
    /// Normalize and validate the payload.
    ///
    /// Never touches storage; on failure every violated rule is reported as
    /// a `field: message` entry.
    pub fn into_content(mut self) -> Result<AssetContent> {
        self.ca_image_carousel = Some(discard_blank_entries(self.ca_image_carousel.take()));

        self.validate()
            .map_err(|e| AppError::InvalidFields(field_messages(&e)))?;

        Ok(AssetContent {
            title: self.ca_title,
            tagline: self.ca_tagline,
            image: self.ca_image,
            image_carousel: self.ca_image_carousel.unwrap_or_default(),
            subtitle: self.ca_subtitle,
            link: self.ca_link,
            category_id: self.ca_cc_id,
        })
    }
}

/// List view of an asset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetSummaryDto {
    pub ca_id: i64,
    pub ca_title: Option<String>,
    pub ca_image: Option<String>,
    pub ca_link: Option<String>,
    pub ca_subtitle: Option<String>,
    pub cc_id: Option<i64>,
    pub cc_name: Option<String>,
}

impl From<AssetWithCategory> for AssetSummaryDto {
    fn from(row: AssetWithCategory) -> Self {
        let asset = row.asset;
        Self {
            ca_id: asset.ca_id,
            ca_title: asset.ca_title,
            ca_image: asset.ca_image,
            ca_link: asset.ca_link,
            ca_subtitle: asset.ca_subtitle,
            cc_id: row.cc_id,
            cc_name: row.cc_name,
        }
    }
}

/// Full asset detail, including audit fields and category name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetDetailDto {
    pub ca_id: i64,
    pub ca_title: Option<String>,
    pub ca_tagline: Option<String>,
    pub ca_image: Option<String>,
    pub ca_image_carousel: Vec<String>,
    pub ca_subtitle: Option<String>,
    pub ca_link: Option<String>,
    pub ca_cc_id: Option<i64>,
    pub cc_id: Option<i64>,
    pub cc_name: Option<String>,
    #[schema(value_type = chrono::NaiveDateTime)]
    pub created_at: AuditTimestamp,
    pub created_by: String,
    #[schema(value_type = Option<chrono::NaiveDateTime>)]
    pub updated_at: Option<AuditTimestamp>,
    pub updated_by: Option<String>,
}

impl From<AssetWithCategory> for AssetDetailDto {
    fn from(row: AssetWithCategory) -> Self {
        let asset = row.asset;
        Self {
            ca_id: asset.ca_id,
            ca_title: asset.ca_title,
            ca_tagline: asset.ca_tagline,
            ca_image: asset.ca_image,
            ca_image_carousel: asset.ca_image_carousel.unwrap_or_default(),
            ca_subtitle: asset.ca_subtitle,
            ca_link: asset.ca_link,
            ca_cc_id: asset.ca_cc_id,
            cc_id: row.cc_id,
            cc_name: row.cc_name,
            created_at: asset.created_at,
            created_by: asset.created_by,
            updated_at: asset.updated_at,
            updated_by: asset.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://cdn.example/{}.png", i)).collect()
    }

    fn field_errors(result: Result<AssetContent>) -> Vec<String> {
        match result {
            Err(AppError::InvalidFields(errors)) => errors,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_payload_is_accepted() {
        let content = AssetPayloadDto::default().into_content().unwrap();
        assert_eq!(content, AssetContent::default());
    }

    #[test]
    fn test_whitespace_title_rejected() {
        let dto = AssetPayloadDto {
            ca_title: Some("   ".to_string()),
            ..Default::default()
        };
        let errors = field_errors(dto.into_content());
        assert!(errors.contains(&"ca_title: title cannot be empty".to_string()));
    }

    #[test]
    fn test_null_title_accepted() {
        let dto = AssetPayloadDto {
            ca_title: None,
            ca_tagline: Some("Tagline".to_string()),
            ..Default::default()
        };
        assert!(dto.into_content().is_ok());
    }

    #[test]
    fn test_title_length_bound() {
        let ok = AssetPayloadDto {
            ca_title: Some("a".repeat(500)),
            ..Default::default()
        };
        assert!(ok.into_content().is_ok());

        let too_long = AssetPayloadDto {
            ca_title: Some("a".repeat(501)),
            ..Default::default()
        };
        let errors = field_errors(too_long.into_content());
        assert_eq!(errors, vec!["ca_title: title must be 1-500 characters"]);
    }

    #[test]
    fn test_twenty_images_accepted() {
        let dto = AssetPayloadDto {
            ca_image_carousel: Some(images(20)),
            ..Default::default()
        };
        assert_eq!(dto.into_content().unwrap().image_carousel.len(), 20);
    }

    #[test]
    fn test_twenty_one_images_rejected() {
        let dto = AssetPayloadDto {
            ca_image_carousel: Some(images(21)),
            ..Default::default()
        };
        let errors = field_errors(dto.into_content());
        assert_eq!(errors, vec!["ca_image_carousel: maximum 20 images"]);
    }

    #[test]
    fn test_blank_images_do_not_count_toward_limit() {
        let mut carousel = images(20);
        carousel.insert(3, "  ".to_string());
        carousel.push(String::new());
        let dto = AssetPayloadDto {
            ca_image_carousel: Some(carousel),
            ..Default::default()
        };

        let content = dto.into_content().unwrap();
        assert_eq!(content.image_carousel, images(20));
    }

    #[test]
    fn test_non_positive_category_rejected() {
        for id in [0, -4] {
            let dto = AssetPayloadDto {
                ca_cc_id: Some(id),
                ..Default::default()
            };
            let errors = field_errors(dto.into_content());
            assert_eq!(
                errors,
                vec!["ca_cc_id: category id must be a positive integer"]
            );
        }
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let dto = AssetPayloadDto {
            ca_link: Some("x".repeat(2001)),
            ca_tagline: Some("x".repeat(1001)),
            ..Default::default()
        };
        let errors = field_errors(dto.into_content());
        assert_eq!(
            errors,
            vec![
                "ca_link: link must not exceed 2000 characters",
                "ca_tagline: tagline must not exceed 1000 characters",
            ]
        );
    }

    #[test]
    fn test_unknown_fields_ignored_and_missing_carousel_defaults_empty() {
        let dto: AssetPayloadDto =
            serde_json::from_str(r#"{"ca_title": "Launch Event", "ca_cc_id": 3, "extra": 1}"#)
                .unwrap();
        let content = dto.into_content().unwrap();
        assert_eq!(content.title.as_deref(), Some("Launch Event"));
        assert_eq!(content.category_id, Some(3));
        assert!(content.image_carousel.is_empty());
    }
}
