//! Reports screen
//!
//! The backend renders the general inventory report as a PDF; this screen
//! fetches the bytes and saves them under a dated filename.

use std::path::{Path, PathBuf};

use inventory_api::InventoryBackend;

use crate::ScreenError;

/// The reports screen
pub struct ReportsScreen<B> {
    backend: B,
}

impl<B: InventoryBackend> ReportsScreen<B> {
    /// Create the screen
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the inventory report and write it into `dir`
    ///
    /// The file is named `Inventario_General_YYYY-MM-DD.pdf` after today's
    /// local date. Returns the path of the written file.
    pub async fn export(&self, dir: &Path) -> Result<PathBuf, ScreenError> {
        tracing::info!("fetching inventory report");
        let bytes = self
            .backend
            .inventory_report()
            .await
            .map_err(|err| ScreenError::action(err, "Error al generar el reporte"))?;

        let filename = format!(
            "Inventario_General_{}.pdf",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let path = dir.join(filename);

        tokio::fs::write(&path, &bytes).await.map_err(|e| ScreenError::Action {
            message: format!("No se pudo guardar el reporte: {e}"),
        })?;

        tracing::info!(path = %path.display(), size = bytes.len(), "report saved");
        Ok(path)
    }
}
