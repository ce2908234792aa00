/// Default minimum role level for creating, updating and deleting assets
pub const DEFAULT_ASSET_WRITE_MIN_ROLE_LEVEL: i32 = 10;

/// Actor recorded in audit columns when the caller carries no username
pub const SYSTEM_ACTOR: &str = "system";

// =============================================================================
// ASSET FIELD LIMITS
// =============================================================================

pub const MAX_TITLE_LENGTH: u64 = 500;
pub const MAX_TAGLINE_LENGTH: u64 = 1000;
pub const MAX_SUBTITLE_LENGTH: u64 = 1000;
pub const MAX_IMAGE_LENGTH: u64 = 2000;
pub const MAX_LINK_LENGTH: u64 = 2000;

/// Maximum number of non-blank carousel images per asset
pub const MAX_CAROUSEL_IMAGES: u64 = 20;
