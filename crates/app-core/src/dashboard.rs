//! Dashboard screen
//!
//! Summarizes the inventory: total counts, total purchase value, and a
//! breakdown of assets by lifecycle state. Everything here is derived from
//! the asset and warehouse listings; the backend has no stats endpoint.

use app_state::screen::{named, ScreenScope};
use inventory_api::types::{Asset, AssetStatus, Warehouse};
use inventory_api::InventoryBackend;

use crate::{ScreenError, ScreenStatus};

/// Asset counts per lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Assets available for assignment
    pub available: usize,
    /// Assets currently assigned
    pub assigned: usize,
    /// Assets under repair
    pub in_repair: usize,
    /// Written-off assets
    pub decommissioned: usize,
}

/// Derived inventory summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// Total number of assets, regardless of state
    pub total_assets: usize,
    /// Total number of warehouses
    pub total_warehouses: usize,
    /// Sum of purchase values; assets without one count as zero
    pub total_value: f64,
    /// Breakdown by lifecycle state
    pub by_status: StatusCounts,
}

impl DashboardStats {
    /// Compute the summary from raw listings
    pub fn compute(assets: &[Asset], warehouses: &[Warehouse]) -> Self {
        let mut by_status = StatusCounts::default();
        let mut total_value = 0.0;

        for asset in assets {
            total_value += asset.purchase_value.unwrap_or(0.0);
            match asset.status {
                AssetStatus::Available => by_status.available += 1,
                AssetStatus::Assigned => by_status.assigned += 1,
                AssetStatus::InRepair => by_status.in_repair += 1,
                AssetStatus::Decommissioned => by_status.decommissioned += 1,
                // Unknown states count in the total only
                AssetStatus::Unknown => {}
            }
        }

        Self {
            total_assets: assets.len(),
            total_warehouses: warehouses.len(),
            total_value,
            by_status,
        }
    }
}

/// The dashboard screen
pub struct DashboardScreen<B> {
    backend: B,
    scope: ScreenScope,
    /// Load cycle state
    pub status: ScreenStatus,
    /// Summary shown on screen; `None` until the first successful load
    pub stats: Option<DashboardStats>,
}

impl<B: InventoryBackend> DashboardScreen<B> {
    /// Create the screen; call [`load`](Self::load) to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            scope: ScreenScope::new(),
            status: ScreenStatus::Loading,
            stats: None,
        }
    }

    /// Load the listings and derive the summary, all-or-nothing
    pub async fn load(&mut self) -> Result<(), ScreenError> {
        self.status = ScreenStatus::Loading;

        let backend = &self.backend;
        let result = self
            .scope
            .run(async {
                tokio::try_join!(
                    named("activos", backend.list_assets()),
                    named("bodegas", backend.list_warehouses()),
                )
            })
            .await;

        match result {
            Ok((assets, warehouses)) => {
                self.stats = Some(DashboardStats::compute(&assets, &warehouses));
                self.status = ScreenStatus::Ready;
                Ok(())
            }
            Err(app_state::LoadError::Cancelled) => Err(app_state::LoadError::Cancelled.into()),
            Err(e) => {
                self.stats = None;
                self.status = ScreenStatus::Failed;
                Err(e.into())
            }
        }
    }
}
