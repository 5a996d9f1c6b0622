use log::debug;

use crate::fitting::Fitting;

/// Errors while loading a fitting catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog JSON did not match the expected shape.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fitting inventory backing the list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    fittings: Vec<Fitting>,
}

impl Catalog {
    /// Load a catalog from its JSON representation, an array of fitting
    /// records in the upstream field naming.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let fittings: Vec<Fitting> = serde_json::from_str(raw)?;
        debug!("catalog loaded: {} fittings", fittings.len());
        Ok(Self { fittings })
    }

    pub fn fittings(&self) -> &[Fitting] {
        &self.fittings
    }

    pub fn len(&self) -> usize {
        self.fittings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fittings.is_empty()
    }

    /// Look a fitting up by its device id.
    pub fn get(&self, device_id: &str) -> Option<&Fitting> {
        self.fittings.iter().find(|f| f.device_id == device_id)
    }

    /// Flip the favorite flag on a fitting.
    ///
    /// Returns the new flag, or `None` when the device id is unknown.
    pub fn toggle_favorite(&mut self, device_id: &str) -> Option<bool> {
        let fitting = self.fittings.iter_mut().find(|f| f.device_id == device_id)?;
        fitting.favorite = !fitting.favorite;
        Some(fitting.favorite)
    }
}
