mod asset;

pub use asset::{Asset, AssetChanges, AssetContent, AssetWithCategory, AuditTimestamp, NewAsset};
