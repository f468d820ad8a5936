//! Category domain entity and related types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::product::{ProductNameRef, ProductSlugRef};
use crate::config::{MSG_NAME_DESCRIPTION_REQUIRED, SLUG_PATTERN};
use crate::errors::{AppError, AppResult};

static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(SLUG_PATTERN).expect("SLUG_PATTERN is a valid regex"));

/// Return `true` when `value` is a lowercase kebab-case slug.
pub fn is_valid_slug(value: &str) -> bool {
    SLUG_REGEX.is_match(value)
}

/// `validator` hook for slug fields.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if is_valid_slug(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug");
        err.message = Some("Slug must be lowercase letters, digits and hyphens.".into());
        Err(err)
    }
}

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Weak references to products, in insertion order
    pub products: Vec<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Resolve product references against a lookup table.
    ///
    /// References with no entry are dropped; order is preserved.
    fn resolve<P: Clone>(&self, lookup: &HashMap<Uuid, P>) -> Vec<P> {
        self.products
            .iter()
            .filter_map(|id| lookup.get(id).cloned())
            .collect()
    }

    /// Project into the public listing shape (products reduced to id + slug).
    pub fn into_listing(self, lookup: &HashMap<Uuid, ProductSlugRef>) -> CategoryListing {
        let products = self.resolve(lookup);
        CategoryListing {
            id: self.id,
            name: self.name,
            description: self.description,
            slug: self.slug,
            products,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Project into the detail shape (products reduced to id + name).
    pub fn into_detail(self, lookup: &HashMap<Uuid, ProductNameRef>) -> CategoryDetail {
        let products = self.resolve(lookup);
        CategoryDetail {
            id: self.id,
            name: self.name,
            description: self.description,
            slug: self.slug,
            products,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Category with products reduced to `{id, slug}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub products: Vec<ProductSlugRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category with products reduced to `{id, name}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub products: Vec<ProductNameRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category creation data transfer object
///
/// Required fields are checked when converting into [`NewCategory`] so a
/// missing field and an empty one report the same message.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[schema(example = "Shoes")]
    pub name: Option<String>,
    #[schema(example = "Footwear")]
    pub description: Option<String>,
    pub products: Option<Vec<Uuid>>,
    pub is_active: Option<bool>,
}

/// A category that passed creation checks and is ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub products: Vec<Uuid>,
    pub is_active: bool,
}

impl TryFrom<CreateCategory> for NewCategory {
    type Error = AppError;

    fn try_from(input: CreateCategory) -> AppResult<Self> {
        let name = input.name.filter(|n| !n.is_empty());
        let description = input.description.filter(|d| !d.is_empty());

        match (name, description) {
            (Some(name), Some(description)) => Ok(Self {
                name,
                description,
                products: input.products.unwrap_or_default(),
                is_active: input.is_active.unwrap_or(true),
            }),
            _ => Err(AppError::validation(MSG_NAME_DESCRIPTION_REQUIRED)),
        }
    }
}

/// Partial category update; only `Some` fields change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub products: Option<Vec<Uuid>>,
    pub is_active: Option<bool>,
}

impl CategoryChanges {
    /// Changes that only flip the active flag
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Default::default()
        }
    }
}

/// Outcome of a hard delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteSummary {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_with(products: Vec<Uuid>) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::new_v4(),
            name: "Shoes".to_string(),
            description: "Footwear".to_string(),
            slug: Some("shoes".to_string()),
            products,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_category_requires_name_and_description() {
        let missing_name = CreateCategory {
            description: Some("Footwear".into()),
            ..Default::default()
        };
        let missing_description = CreateCategory {
            name: Some("Shoes".into()),
            ..Default::default()
        };
        let empty_name = CreateCategory {
            name: Some(String::new()),
            description: Some("Footwear".into()),
            ..Default::default()
        };

        for input in [missing_name, missing_description, empty_name] {
            match NewCategory::try_from(input) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_NAME_DESCRIPTION_REQUIRED),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn new_category_defaults() {
        let category = NewCategory::try_from(CreateCategory {
            name: Some("Shoes".into()),
            description: Some("Footwear".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(category.is_active);
        assert!(category.products.is_empty());
    }

    #[test]
    fn listing_keeps_order_and_drops_dangling_refs() {
        let (a, b, gone) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let lookup: HashMap<_, _> = [a, b]
            .into_iter()
            .map(|id| (id, ProductSlugRef { id, slug: format!("p-{}", id.simple()) }))
            .collect();

        let listing = category_with(vec![b, gone, a]).into_listing(&lookup);

        let ids: Vec<_> = listing.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn slug_pattern() {
        assert!(is_valid_slug("running-shoes"));
        assert!(is_valid_slug("kids2"));
        assert!(!is_valid_slug("Running Shoes"));
        assert!(!is_valid_slug("-shoes"));
        assert!(!is_valid_slug("shoes--sale"));
        assert!(!is_valid_slug(""));
        assert!(validate_slug("Shoes").is_err());
    }

    #[test]
    fn category_serializes_camel_case() {
        let json = serde_json::to_value(category_with(vec![])).unwrap();
        assert_eq!(json["isActive"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("is_active").is_none());
    }
}
