use anyhow::{Context, Result};
use reel_state::{ImageType, Label, SlotImage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Asset entry for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolData {
    #[serde(rename = "type")]
    pub image_type: ImageType,
    pub src: String,
}

/// Raw symbols.json file format
#[derive(Debug, Deserialize)]
struct SymbolsFile {
    #[allow(dead_code)]
    version: String,
    symbols: Vec<SymbolData>,
}

/// Starting layout of the reel: (id, type, label)
const STARTER_REEL: [(u32, ImageType, Option<Label>); 15] = [
    (1, ImageType::A, None),
    (2, ImageType::N9, None),
    (3, ImageType::N10, None),
    (4, ImageType::J, None),
    (5, ImageType::Face, None),
    (6, ImageType::Gun, Some(Label::Bonus)),
    (7, ImageType::Hat, Some(Label::Scatter)),
    (8, ImageType::J, None),
    (9, ImageType::K, None),
    (10, ImageType::Q, None),
    (11, ImageType::A, None),
    (12, ImageType::K, None),
    (13, ImageType::N9, None),
    (14, ImageType::Dog, Some(Label::Wild)),
    (15, ImageType::Q, None),
];

/// Resolves each symbol type to the asset the reel renders
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    sources: HashMap<ImageType, String>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        let sources = ImageType::ALL
            .iter()
            .map(|t| (*t, default_src(*t)))
            .collect();
        Self { sources }
    }
}

impl SymbolCatalog {
    /// Load symbol assets from the data directory.
    /// Types missing from symbols.json keep their bundled default.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut catalog = Self::default();

        let symbols_path = data_dir.join("symbols.json");
        if symbols_path.exists() {
            let content = std::fs::read_to_string(&symbols_path)
                .context("Failed to read symbols.json")?;
            let file: SymbolsFile =
                serde_json::from_str(&content).context("Failed to parse symbols.json")?;

            let count = file.symbols.len();
            for symbol in file.symbols {
                catalog.sources.insert(symbol.image_type, symbol.src);
            }

            tracing::info!("Loaded {} symbols from {}", count, symbols_path.display());
        } else {
            tracing::warn!(
                "No symbols.json found at {}. Using bundled asset paths",
                symbols_path.display()
            );
        }

        Ok(catalog)
    }

    pub fn src(&self, image_type: ImageType) -> &str {
        self.sources
            .get(&image_type)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn default_src(image_type: ImageType) -> String {
    format!("assets/{}.jpg", image_type)
}

/// The 15-entry reel shown before the first spin
pub fn starter_images(catalog: &SymbolCatalog) -> Vec<SlotImage> {
    STARTER_REEL
        .iter()
        .map(|&(id, image_type, label)| SlotImage {
            id,
            image_type,
            src: catalog.src(image_type).to_string(),
            label,
        })
        .collect()
}
