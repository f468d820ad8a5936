//! Shared fixtures for the integration tests.
//!
//! In-memory repositories stand in for PostgreSQL so the real services,
//! auth gate and router can be driven end to end.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use storefront_api::api::{create_router, AppState};
use storefront_api::config::{Config, MSG_SLUG_IN_USE};
use storefront_api::domain::{
    Category, CategoryChanges, NewCategory, ProductNameRef, ProductSlugRef, Role,
};
use storefront_api::errors::{AppError, AppResult};
use storefront_api::infra::{CategoryRepository, Database, ProductRepository};
use storefront_api::services::{CategoryManager, JwtGate};

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

// =============================================================================
// In-memory category store
// =============================================================================

#[derive(Default)]
pub struct MemoryCategories {
    rows: Mutex<Vec<Category>>,
}

impl MemoryCategories {
    pub fn snapshot(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Category> {
        self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategories {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.get(id))
    }

    async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.get(id).filter(|c| c.is_active))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.slug.as_deref() == Some(slug)).cloned())
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let now = Utc::now();
        let created = Category {
            id: Uuid::new_v4(),
            name: category.name,
            description: category.description,
            slug: None,
            products: category.products,
            is_active: category.is_active,
            created_at: now,
            updated_at: now,
        };

        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();

        // Mirrors the unique index on slug
        if let Some(slug) = changes.slug.as_deref() {
            if rows.iter().any(|c| c.id != id && c.slug.as_deref() == Some(slug)) {
                return Err(AppError::conflict(MSG_SLUG_IN_USE));
            }
        }

        let Some(row) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(0);
        };

        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(slug) = changes.slug {
            row.slug = Some(slug);
        }
        if let Some(products) = changes.products {
            row.products = products;
        }
        if let Some(is_active) = changes.is_active {
            row.is_active = is_active;
        }
        row.updated_at = Utc::now();

        Ok(1)
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn list_active(&self) -> AppResult<Vec<Category>> {
        Ok(self.snapshot().into_iter().filter(|c| c.is_active).collect())
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.snapshot())
    }
}

// =============================================================================
// In-memory product store
// =============================================================================

#[derive(Debug, Clone)]
pub struct StoredProduct {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

#[derive(Default)]
pub struct MemoryProducts {
    rows: Mutex<Vec<StoredProduct>>,
    disable_calls: Mutex<Vec<Vec<Uuid>>>,
}

impl MemoryProducts {
    /// Seed an active product and return its id
    pub fn insert(&self, name: &str, slug: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(StoredProduct {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            is_active: true,
        });
        id
    }

    pub fn is_active(&self, id: Uuid) -> Option<bool> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.is_active)
    }

    /// Id lists passed to `disable_many`, in call order
    pub fn disable_calls(&self) -> Vec<Vec<Uuid>> {
        self.disable_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepository for MemoryProducts {
    async fn find_slug_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductSlugRef>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| ProductSlugRef {
                id: p.id,
                slug: p.slug.clone(),
            })
            .collect())
    }

    async fn find_name_refs(&self, ids: &[Uuid]) -> AppResult<Vec<ProductNameRef>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| ProductNameRef {
                id: p.id,
                name: p.name.clone(),
            })
            .collect())
    }

    async fn disable_many(&self, ids: &[Uuid]) -> AppResult<u64> {
        self.disable_calls.lock().unwrap().push(ids.to_vec());

        let mut touched = 0;
        for product in self.rows.lock().unwrap().iter_mut() {
            if ids.contains(&product.id) {
                product.is_active = false;
                touched += 1;
            }
        }
        Ok(touched)
    }
}

// =============================================================================
// Router harness
// =============================================================================

pub struct TestApp {
    router: Router,
    gate: JwtGate,
    pub categories: Arc<MemoryCategories>,
    pub products: Arc<MemoryProducts>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = Config::new("postgres://unused/test", TEST_SECRET).unwrap();
        let categories = Arc::new(MemoryCategories::default());
        let products = Arc::new(MemoryProducts::default());

        let service = Arc::new(CategoryManager::new(categories.clone(), products.clone()));
        let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
        let state = AppState::new(service, Arc::new(JwtGate::new(config.clone())), database);

        Self {
            router: create_router(state),
            gate: JwtGate::new(config),
            categories,
            products,
        }
    }

    /// Bearer token for a fresh caller with the given role
    pub fn token(&self, role: Role) -> String {
        self.gate
            .issue(Uuid::new_v4(), &format!("{}@example.com", role), role)
            .unwrap()
            .access_token
    }

    pub fn admin_token(&self) -> String {
        self.token(Role::Admin)
    }

    /// Send a request and decode the JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    /// Create a category as admin and return its id
    pub async fn add_category(&self, body: Value) -> Uuid {
        let token = self.admin_token();
        let (status, json) = self
            .send(Method::POST, "/api/category/add", Some(&token), Some(body))
            .await;
        assert_eq!(status, StatusCode::OK, "add failed: {json}");

        json["category"]["id"].as_str().unwrap().parse().unwrap()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids of the categories in a `{categories: [...]}` body
pub fn category_ids(body: &Value) -> Vec<Uuid> {
    body["categories"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|c| c["id"].as_str())
                .filter_map(|id| id.parse().ok())
                .collect()
        })
        .unwrap_or_default()
}
