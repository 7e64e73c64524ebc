use serde::Deserialize;

// Parámetros de GET /api/geocode
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeParams {
    pub q: Option<String>,
}

impl GeocodeParams {
    /// Texto de búsqueda sin espacios sobrantes; None si queda vacío
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}
