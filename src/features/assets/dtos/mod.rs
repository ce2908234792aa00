mod asset_dto;

pub use asset_dto::{AssetDetailDto, AssetPayloadDto, AssetSummaryDto};
