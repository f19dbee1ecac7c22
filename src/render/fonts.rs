use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{DotsError, DotsResult};

/// Raw font file bytes plus the face index inside a collection.
#[derive(Clone)]
pub struct FontFace {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontFace {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            index: 0,
        }
    }
}

/// Read a TTF/OTF from disk.
pub fn load_font_file(path: &Path) -> DotsResult<FontFace> {
    let bytes = std::fs::read(path).map_err(|e| {
        DotsError::validation(format!("read font '{}': {e}", path.display()))
    })?;
    if bytes.is_empty() {
        return Err(DotsError::validation(format!(
            "font file '{}' is empty",
            path.display()
        )));
    }
    Ok(FontFace::from_bytes(bytes))
}

/// First system monospace face, falling back to sans-serif.
pub fn discover_system_font() -> Option<FontFace> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");

    let families = [
        usvg::fontdb::Family::Monospace,
        usvg::fontdb::Family::SansSerif,
    ];
    let query = usvg::fontdb::Query {
        families: &families,
        ..usvg::fontdb::Query::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| FontFace {
        bytes: Arc::new(data.to_vec()),
        index,
    })
}

/// An explicit path must load; without one the system is searched and `None` means "no text".
pub fn resolve_font(explicit: Option<&Path>) -> DotsResult<Option<FontFace>> {
    match explicit {
        Some(path) => load_font_file(path).map(Some),
        None => {
            let found = discover_system_font();
            if found.is_none() {
                tracing::warn!("no system font found; text will be skipped");
            }
            Ok(found)
        }
    }
}
