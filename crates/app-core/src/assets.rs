//! Assets screen
//!
//! Lists assets with their category and warehouse, registers new ones, and
//! writes assets off. The creation form needs the category and warehouse
//! listings for its selects, so the screen loads all three together.

use app_state::screen::{named, ScreenScope};
use app_state::LoadError;
use inventory_api::types::{Asset, Category, NewAsset, Warehouse};
use inventory_api::InventoryBackend;

use crate::{ScreenError, ScreenStatus};

/// Form state for registering an asset
#[derive(Debug, Clone, Default)]
pub struct AssetForm {
    /// Inventory code, required
    pub code: String,
    /// Display name, required
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Selected category
    pub category_id: Option<i64>,
    /// Selected warehouse
    pub warehouse_id: Option<i64>,
    /// Purchase value
    pub purchase_value: Option<f64>,
    /// Acquisition date; empty means "now"
    pub acquired_at: String,
}

impl AssetForm {
    fn validate(&self) -> Result<NewAsset, ScreenError> {
        let code = self.code.trim();
        let name = self.name.trim();
        if code.is_empty() || name.is_empty() {
            return Err(ScreenError::Validation(
                "código y nombre son requeridos".to_string(),
            ));
        }

        let acquired_at = if self.acquired_at.trim().is_empty() {
            chrono::Utc::now().to_rfc3339()
        } else {
            self.acquired_at.trim().to_string()
        };

        let description = self.description.trim();
        Ok(NewAsset {
            codigo: code.to_string(),
            nombre: name.to_string(),
            descripcion: (!description.is_empty()).then(|| description.to_string()),
            categoria_id: self.category_id,
            bodega_id: self.warehouse_id,
            valor_compra: self.purchase_value,
            fecha_adquisicion: Some(acquired_at),
        })
    }
}

/// The assets screen
pub struct AssetsScreen<B> {
    backend: B,
    scope: ScreenScope,
    /// Load cycle state
    pub status: ScreenStatus,
    /// Asset listing
    pub assets: Vec<Asset>,
    /// Warehouse listing, for the form select
    pub warehouses: Vec<Warehouse>,
    /// Category listing, for the form select
    pub categories: Vec<Category>,
    /// Creation form state
    pub form: AssetForm,
}

impl<B: InventoryBackend> AssetsScreen<B> {
    /// Create the screen; call [`load`](Self::load) to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scope: ScreenScope::new(),
            status: ScreenStatus::Loading,
            assets: Vec::new(),
            warehouses: Vec::new(),
            categories: Vec::new(),
            form: AssetForm::default(),
        }
    }

    /// Load the three listings, all-or-nothing
    pub async fn load(&mut self) -> Result<(), ScreenError> {
        self.status = ScreenStatus::Loading;

        let backend = &self.backend;
        let result = self
            .scope
            .run(async {
                tokio::try_join!(
                    named("activos", backend.list_assets()),
                    named("bodegas", backend.list_warehouses()),
                    named("categorias", backend.list_categories()),
                )
            })
            .await;

        match result {
            Ok((assets, warehouses, categories)) => {
                self.assets = assets;
                self.warehouses = warehouses;
                self.categories = categories;
                self.status = ScreenStatus::Ready;
                Ok(())
            }
            Err(LoadError::Cancelled) => Err(LoadError::Cancelled.into()),
            Err(e) => {
                self.assets.clear();
                self.warehouses.clear();
                self.categories.clear();
                self.status = ScreenStatus::Failed;
                Err(e.into())
            }
        }
    }

    /// Register the asset described by the form, then reload
    pub async fn create(&mut self) -> Result<(), ScreenError> {
        let body = self.form.validate()?;

        if let Err(err) = self.backend.create_asset(&body).await {
            return Err(ScreenError::action(err, "Error al crear el activo"));
        }

        tracing::info!(code = %body.codigo, "asset registered");
        self.form = AssetForm::default();
        self.load().await
    }

    /// Write off an asset, then reload
    ///
    /// Callers confirm with the user before calling this. On failure the
    /// listing is left as it was.
    pub async fn decommission(&mut self, id: i64) -> Result<(), ScreenError> {
        if let Err(err) = self.backend.decommission_asset(id).await {
            return Err(ScreenError::action(err, "Error al dar de baja el activo"));
        }

        tracing::info!(asset_id = id, "asset decommissioned");
        self.load().await
    }
}
