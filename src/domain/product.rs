//! Product references as seen from the catalog.
//!
//! Products are owned by the product store; categories only hold their ids
//! and read back the narrow projections below.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product reduced to identifier and slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductSlugRef {
    pub id: Uuid,
    #[schema(example = "trail-runner")]
    pub slug: String,
}

/// Product reduced to identifier and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductNameRef {
    pub id: Uuid,
    #[schema(example = "Trail Runner")]
    pub name: String,
}
