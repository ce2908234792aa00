//! Company-profile assets: promotional records with images, links and an
//! optional category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/assets/` | No | List assets with category name |
//! | GET | `/assets/{id}` | No | Asset detail |
//! | POST | `/assets/` | Role level | Create asset |
//! | PUT | `/assets/{id}` | Role level | Replace asset content |
//! | DELETE | `/assets/{id}` | Role level | Delete asset |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{AssetRepository, PgAssetRepository};
pub use services::AssetService;
