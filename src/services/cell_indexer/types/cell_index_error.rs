use h3o::error::{InvalidLatLng, InvalidResolution};

/// Errors raised by the indexing library, passed along untranslated.
#[derive(Debug, Clone)]
pub enum CellIndexError {
    LatLng(InvalidLatLng),
    Resolution(InvalidResolution),
}

impl std::fmt::Display for CellIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CellIndexError::LatLng(e) => write!(f, "{}", e),
            CellIndexError::Resolution(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CellIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CellIndexError::LatLng(e) => Some(e),
            CellIndexError::Resolution(e) => Some(e),
        }
    }
}

impl From<InvalidLatLng> for CellIndexError {
    fn from(e: InvalidLatLng) -> Self {
        CellIndexError::LatLng(e)
    }
}

impl From<InvalidResolution> for CellIndexError {
    fn from(e: InvalidResolution) -> Self {
        CellIndexError::Resolution(e)
    }
}
