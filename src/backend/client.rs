/// Hosted backend client
///
/// The portfolio lives in a PostgREST-style hosted database: plain JSON over
/// `/rest/v1/<table>`, authenticated with an API key header pair. Reads come
/// back newest first; every successful write is followed by a full re-read
/// instead of patching the in-memory list (data volumes are tiny and this
/// keeps displayed and persisted state from diverging).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::state::data::{Category, Project};

use super::error::BackendError;

/// Raw portfolio row as stored by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw category row as stored by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a portfolio entry
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Payload for creating a category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PortfolioApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PortfolioApi {
    /// Build a client from the loaded configuration, or `None` when the
    /// backend is not wired up (offline mode).
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        if !config.has_backend() {
            return None;
        }
        Some(Self {
            client: reqwest::Client::new(),
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            api_key: config.backend_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::warn!(%status, "backend rejected the request");
            Err(BackendError::Status(status))
        }
    }

    /// Read one table in full, newest first.
    async fn select_all<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let rows = Self::check(response).await?.json().await?;
        Ok(rows)
    }

    async fn insert<T: Serialize>(&self, table: &str, payload: &T) -> Result<(), BackendError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(&[payload])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn patch_by_id<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        payload: &T,
    ) -> Result<(), BackendError> {
        let response = self
            .authed(self.client.patch(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(payload)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), BackendError> {
        let response = self
            .authed(self.client.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn fetch_categories(&self) -> Result<Vec<CategoryRow>, BackendError> {
        self.select_all("categories").await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<ProjectRow>, BackendError> {
        self.select_all("portfolios").await
    }

    /// Full catalog read: categories first, then projects, with category
    /// references resolved to display data.
    pub async fn fetch_catalog(&self) -> Result<(Vec<Category>, Vec<Project>), BackendError> {
        let categories = self.fetch_categories().await?;
        let projects = self.fetch_projects().await?;
        tracing::info!(
            categories = categories.len(),
            projects = projects.len(),
            "catalog fetched"
        );
        Ok(resolve_catalog(categories, projects))
    }

    pub async fn create_project(&self, payload: ProjectPayload) -> Result<(), BackendError> {
        self.insert("portfolios", &payload).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        payload: ProjectPayload,
    ) -> Result<(), BackendError> {
        self.patch_by_id("portfolios", id, &payload).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), BackendError> {
        self.delete_by_id("portfolios", id).await
    }

    pub async fn create_category(&self, payload: CategoryPayload) -> Result<(), BackendError> {
        self.insert("categories", &payload).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), BackendError> {
        self.delete_by_id("categories", id).await
    }
}

/// Map raw rows to display data, resolving each project's category id to its
/// name. A dangling or null reference simply leaves the name unresolved; the
/// UI falls back to an "uncategorized" label.
pub fn resolve_catalog(
    categories: Vec<CategoryRow>,
    projects: Vec<ProjectRow>,
) -> (Vec<Category>, Vec<Project>) {
    let categories: Vec<Category> = categories
        .into_iter()
        .map(|row| Category {
            id: row.id,
            name: row.name,
            description: row.description,
        })
        .collect();

    let projects = projects
        .into_iter()
        .map(|row| {
            let category_name = row.category_id.as_ref().and_then(|id| {
                categories
                    .iter()
                    .find(|category| category.id == *id)
                    .map(|category| category.name.clone())
            });
            Project {
                id: row.id,
                title: row.title,
                description: row.description.unwrap_or_default(),
                image_url: row.image_url,
                category_id: row.category_id,
                category_name,
                created_at: row.created_at,
            }
        })
        .collect();

    (categories, projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_row(id: &str, name: &str) -> CategoryRow {
        CategoryRow {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    fn project_row(id: &str, title: &str, category_id: Option<&str>) -> ProjectRow {
        ProjectRow {
            id: id.into(),
            title: title.into(),
            description: None,
            image_url: None,
            category_id: category_id.map(Into::into),
            created_at: None,
        }
    }

    #[test]
    fn test_resolve_joins_category_names() {
        let (categories, projects) = resolve_catalog(
            vec![category_row("c1", "Cocinas"), category_row("c2", "Salas")],
            vec![
                project_row("p1", "Cocina en L", Some("c1")),
                project_row("p2", "Centro de entretenimiento", Some("c2")),
            ],
        );

        assert_eq!(categories.len(), 2);
        assert_eq!(projects[0].category_name.as_deref(), Some("Cocinas"));
        assert_eq!(projects[1].category_name.as_deref(), Some("Salas"));
    }

    #[test]
    fn test_dangling_reference_falls_back_to_label() {
        let (_, projects) = resolve_catalog(
            vec![category_row("c1", "Cocinas")],
            vec![
                project_row("p1", "Huérfano", Some("missing")),
                project_row("p2", "Sin categoría", None),
            ],
        );

        // Tolerated, not an error: the badge shows the fallback label.
        assert_eq!(projects[0].category_name, None);
        assert_eq!(projects[0].category_label(), "Sin categoría");
        assert_eq!(projects[1].category_label(), "Sin categoría");
    }

    #[test]
    fn test_resolve_preserves_fetch_order() {
        let (_, projects) = resolve_catalog(
            Vec::new(),
            vec![
                project_row("p3", "tercero", None),
                project_row("p1", "primero", None),
                project_row("p2", "segundo", None),
            ],
        );

        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_rows_deserialize_with_missing_optionals() {
        let row: ProjectRow =
            serde_json::from_str(r#"{"id":"p1","title":"Closet empotrado"}"#).unwrap();

        assert_eq!(row.title, "Closet empotrado");
        assert_eq!(row.description, None);
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = ProjectPayload {
            title: "Cocina".into(),
            description: "desc".into(),
            image_url: None,
            category_id: Some("c1".into()),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("image_url"));
        assert!(json.contains("category_id"));
    }
}
