use h3o::{LatLng, Resolution};

use super::types::cell_index_error::CellIndexError;

pub const DEFAULT_RESOLUTION: u8 = 5;

/// Maps a coordinate to the hex-grid cell containing it. Ranges are not
/// checked here; whatever the backing library rejects comes back as-is.
pub trait CellIndexer: Send + Sync {
    fn cell_index(&self, lat: f64, lon: f64, resolution: u8) -> Result<String, CellIndexError>;
}

#[derive(Clone, Copy, Default)]
pub struct H3Indexer;

impl CellIndexer for H3Indexer {
    fn cell_index(&self, lat: f64, lon: f64, resolution: u8) -> Result<String, CellIndexError> {
        lat_lon_to_h3(lat, lon, Some(resolution))
    }
}

pub fn lat_lon_to_h3(lat: f64, lon: f64, resolution: Option<u8>) -> Result<String, CellIndexError> {
    let resolution = Resolution::try_from(resolution.unwrap_or(DEFAULT_RESOLUTION))?;
    let coord = LatLng::new(lat, lon)?;

    Ok(coord.to_cell(resolution).to_string())
}
