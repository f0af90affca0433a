//! Warehouses screen

use app_state::screen::{named, ScreenScope};
use app_state::LoadError;
use inventory_api::types::{NewWarehouse, Warehouse};
use inventory_api::InventoryBackend;

use crate::{ScreenError, ScreenStatus};

/// Form state for registering a warehouse
#[derive(Debug, Clone, Default)]
pub struct WarehouseForm {
    /// Display name, required
    pub name: String,
    /// Physical location
    pub location: String,
}

impl WarehouseForm {
    fn validate(&self) -> Result<NewWarehouse, ScreenError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScreenError::Validation("nombre es requerido".to_string()));
        }

        let location = self.location.trim();
        Ok(NewWarehouse {
            nombre: name.to_string(),
            ubicacion: (!location.is_empty()).then(|| location.to_string()),
        })
    }
}

/// The warehouses screen
pub struct WarehousesScreen<B> {
    backend: B,
    scope: ScreenScope,
    /// Load cycle state
    pub status: ScreenStatus,
    /// Warehouse listing
    pub warehouses: Vec<Warehouse>,
    /// Creation form state
    pub form: WarehouseForm,
}

impl<B: InventoryBackend> WarehousesScreen<B> {
    /// Create the screen; call [`load`](Self::load) to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scope: ScreenScope::new(),
            status: ScreenStatus::Loading,
            warehouses: Vec::new(),
            form: WarehouseForm::default(),
        }
    }

    /// Load the warehouse listing
    pub async fn load(&mut self) -> Result<(), ScreenError> {
        self.status = ScreenStatus::Loading;

        let backend = &self.backend;
        let result = self
            .scope
            .run(named("bodegas", backend.list_warehouses()))
            .await;

        match result {
            Ok(warehouses) => {
                self.warehouses = warehouses;
                self.status = ScreenStatus::Ready;
                Ok(())
            }
            Err(LoadError::Cancelled) => Err(LoadError::Cancelled.into()),
            Err(e) => {
                self.warehouses.clear();
                self.status = ScreenStatus::Failed;
                Err(e.into())
            }
        }
    }

    /// Register the warehouse described by the form, then reload
    pub async fn create(&mut self) -> Result<(), ScreenError> {
        let body = self.form.validate()?;

        if let Err(err) = self.backend.create_warehouse(&body).await {
            return Err(ScreenError::action(err, "Error al crear la bodega"));
        }

        tracing::info!(name = %body.nombre, "warehouse registered");
        self.form = WarehouseForm::default();
        self.load().await
    }

    /// Delete a warehouse, then reload
    ///
    /// Callers confirm with the user before calling this.
    pub async fn delete(&mut self, id: i64) -> Result<(), ScreenError> {
        if let Err(err) = self.backend.delete_warehouse(id).await {
            return Err(ScreenError::action(err, "Error al eliminar la bodega"));
        }

        tracing::info!(warehouse_id = id, "warehouse deleted");
        self.load().await
    }
}
