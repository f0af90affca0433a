//! Movements screen
//!
//! Shows the transfer history and registers new transfers. The transfer
//! form needs the asset and warehouse listings for its selects, so the
//! screen loads all three together. Written-off assets cannot be moved and
//! are kept out of the candidate list.

use app_state::screen::{named, ScreenScope};
use app_state::LoadError;
use inventory_api::types::{Asset, Movement, TransferRequest, Warehouse};
use inventory_api::InventoryBackend;

use crate::{ScreenError, ScreenStatus};

/// Observation written when the operator leaves the field empty
pub const DEFAULT_OBSERVATION: &str = "Traslado registrado desde Web";

/// Form state for registering a transfer
#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    /// Asset to move, required
    pub asset_id: Option<i64>,
    /// Destination warehouse, required
    pub warehouse_id: Option<i64>,
    /// Operator note; empty falls back to [`DEFAULT_OBSERVATION`]
    pub observation: String,
}

impl TransferForm {
    fn validate(&self) -> Result<TransferRequest, ScreenError> {
        let (Some(asset_id), Some(warehouse_id)) = (self.asset_id, self.warehouse_id) else {
            return Err(ScreenError::Validation(
                "activo y bodega de destino son requeridos".to_string(),
            ));
        };

        let observation = self.observation.trim();
        let observation = if observation.is_empty() {
            DEFAULT_OBSERVATION.to_string()
        } else {
            observation.to_string()
        };

        Ok(TransferRequest {
            activo_id: asset_id,
            bodega_destino_id: warehouse_id,
            observacion: observation,
        })
    }
}

/// The movements screen
pub struct MovementsScreen<B> {
    backend: B,
    scope: ScreenScope,
    /// Load cycle state
    pub status: ScreenStatus,
    /// Movement history, in backend order (newest first)
    pub movements: Vec<Movement>,
    /// Asset listing, for the form select
    pub assets: Vec<Asset>,
    /// Warehouse listing, for the form select
    pub warehouses: Vec<Warehouse>,
    /// Transfer form state
    pub form: TransferForm,
}

impl<B: InventoryBackend> MovementsScreen<B> {
    /// Create the screen; call [`load`](Self::load) to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scope: ScreenScope::new(),
            status: ScreenStatus::Loading,
            movements: Vec::new(),
            assets: Vec::new(),
            warehouses: Vec::new(),
            form: TransferForm::default(),
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
                    named("movimientos", backend.list_movements()),
                    named("activos", backend.list_assets()),
                    named("bodegas", backend.list_warehouses()),
                )
            })
            .await;

        match result {
            Ok((movements, assets, warehouses)) => {
                self.movements = movements;
                self.assets = assets;
                self.warehouses = warehouses;
                self.status = ScreenStatus::Ready;
                Ok(())
            }
            Err(LoadError::Cancelled) => Err(LoadError::Cancelled.into()),
            Err(e) => {
                self.movements.clear();
                self.assets.clear();
                self.warehouses.clear();
                self.status = ScreenStatus::Failed;
                Err(e.into())
            }
        }
    }

    /// Assets that can still be transferred
    pub fn transfer_candidates(&self) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.status.is_transferable())
            .collect()
    }

    /// Register the transfer described by the form, then reload
    pub async fn transfer(&mut self) -> Result<(), ScreenError> {
        let body = self.form.validate()?;

        if let Err(err) = self.backend.transfer_asset(&body).await {
            return Err(ScreenError::action(err, "Error al registrar el traslado"));
        }

        tracing::info!(
            asset_id = body.activo_id,
            warehouse_id = body.bodega_destino_id,
            "transfer registered"
        );
        self.form = TransferForm::default();
        self.load().await
    }
}
