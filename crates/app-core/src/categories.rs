//! Categories screen
//!
//! Categories carry the prefix used when generating asset codes, so both
//! the name and the prefix are required at creation time.

use app_state::screen::{named, ScreenScope};
use app_state::LoadError;
use inventory_api::types::{Category, NewCategory};
use inventory_api::InventoryBackend;

use crate::{ScreenError, ScreenStatus};

/// Message shown when a category cannot be deleted, typically because
/// assets still reference it
pub const DELETE_BLOCKED_MESSAGE: &str =
    "No se puede eliminar la categoría: tiene activos asociados";

/// Form state for registering a category
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    /// Display name, required
    pub name: String,
    /// Code prefix, required
    pub prefix: String,
}

impl CategoryForm {
    fn validate(&self) -> Result<NewCategory, ScreenError> {
        let name = self.name.trim();
        let prefix = self.prefix.trim();
        if name.is_empty() || prefix.is_empty() {
            return Err(ScreenError::Validation(
                "nombre y prefijo son requeridos".to_string(),
            ));
        }

        Ok(NewCategory {
            nombre: name.to_string(),
            prefijo: prefix.to_string(),
        })
    }
}

/// The categories screen
pub struct CategoriesScreen<B> {
    backend: B,
    scope: ScreenScope,
    /// Load cycle state
    pub status: ScreenStatus,
    /// Category listing
    pub categories: Vec<Category>,
    /// Creation form state
    pub form: CategoryForm,
}

impl<B: InventoryBackend> CategoriesScreen<B> {
    /// Create the screen; call [`load`](Self::load) to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scope: ScreenScope::new(),
            status: ScreenStatus::Loading,
            categories: Vec::new(),
            form: CategoryForm::default(),
        }
    }

    /// Load the category listing
    pub async fn load(&mut self) -> Result<(), ScreenError> {
        self.status = ScreenStatus::Loading;

        let backend = &self.backend;
        let result = self
            .scope
            .run(named("categorias", backend.list_categories()))
            .await;

        match result {
            Ok(categories) => {
                self.categories = categories;
                self.status = ScreenStatus::Ready;
                Ok(())
            }
            Err(LoadError::Cancelled) => Err(LoadError::Cancelled.into()),
            Err(e) => {
                self.categories.clear();
                self.status = ScreenStatus::Failed;
                Err(e.into())
            }
        }
    }

    /// Register the category described by the form, then reload
    pub async fn create(&mut self) -> Result<(), ScreenError> {
        let body = self.form.validate()?;

        if let Err(err) = self.backend.create_category(&body).await {
            return Err(ScreenError::action(err, "Error al crear la categoría"));
        }

        tracing::info!(name = %body.nombre, prefix = %body.prefijo, "category registered");
        self.form = CategoryForm::default();
        self.load().await
    }

    /// Delete a category, then reload
    ///
    /// Callers confirm with the user before calling this. A rejected delete
    /// shows a fixed message; the listing is left as it was.
    pub async fn delete(&mut self, id: i64) -> Result<(), ScreenError> {
        if self.backend.delete_category(id).await.is_err() {
            return Err(ScreenError::Action {
                message: DELETE_BLOCKED_MESSAGE.to_string(),
            });
        }

        tracing::info!(category_id = id, "category deleted");
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeBackend;

    #[tokio::test]
    async fn test_load_lists_categories() {
        let backend = FakeBackend::with_sample_data();
        let mut screen = CategoriesScreen::new(backend);

        screen.load().await.unwrap();
        assert_eq!(screen.status, ScreenStatus::Ready);
        assert_eq!(screen.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_create_requires_name_and_prefix() {
        let backend = FakeBackend::with_sample_data();
        let mut screen = CategoriesScreen::new(backend.clone());
        screen.load().await.unwrap();

        screen.form.name = "Muebles".to_string();
        screen.form.prefix = "".to_string();
        let err = screen.create().await.unwrap_err();

        assert!(matches!(err, ScreenError::Validation(_)));
        assert_eq!(backend.call_count("create_category"), 0);
    }

    #[tokio::test]
    async fn test_create_then_reload() {
        let backend = FakeBackend::with_sample_data();
        let mut screen = CategoriesScreen::new(backend.clone());
        screen.load().await.unwrap();

        screen.form.name = "Muebles".to_string();
        screen.form.prefix = "MB".to_string();
        screen.create().await.unwrap();

        assert_eq!(backend.call_count("create_category"), 1);
        assert!(screen.categories.iter().any(|c| c.prefix == "MB"));
        assert!(screen.form.name.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_delete_shows_fixed_message() {
        let backend = FakeBackend::with_sample_data();
        backend.fail_on("delete_category", 400, Some("restricción de clave foránea"));
        let mut screen = CategoriesScreen::new(backend.clone());
        screen.load().await.unwrap();

        let err = screen.delete(1).await.unwrap_err();
        assert_eq!(err.to_string(), DELETE_BLOCKED_MESSAGE);
        assert_eq!(screen.categories.len(), 1);
        assert_eq!(screen.status, ScreenStatus::Ready);
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let backend = FakeBackend::with_sample_data();
        let mut screen = CategoriesScreen::new(backend);
        screen.load().await.unwrap();

        screen.delete(1).await.unwrap();
        assert!(screen.categories.is_empty());
    }
}
