use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod store;

pub use store::{ReelSnapshot, SlotImageStore};

/// Icon category shown in a reel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "K")]
    K,
    #[serde(rename = "Q")]
    Q,
    #[serde(rename = "J")]
    J,
    #[serde(rename = "9")]
    N9,
    #[serde(rename = "10")]
    N10,
    #[serde(rename = "gun")]
    Gun,
    #[serde(rename = "hat")]
    Hat,
    #[serde(rename = "dog")]
    Dog,
    #[serde(rename = "face")]
    Face,
}

impl ImageType {
    pub const ALL: [ImageType; 10] = [
        ImageType::A,
        ImageType::K,
        ImageType::Q,
        ImageType::J,
        ImageType::N9,
        ImageType::N10,
        ImageType::Gun,
        ImageType::Hat,
        ImageType::Dog,
        ImageType::Face,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::A => "A",
            ImageType::K => "K",
            ImageType::Q => "Q",
            ImageType::J => "J",
            ImageType::N9 => "9",
            ImageType::N10 => "10",
            ImageType::Gun => "gun",
            ImageType::Hat => "hat",
            ImageType::Dog => "dog",
            ImageType::Face => "face",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match ImageType::ALL.iter().find(|t| t.as_str() == s) {
            Some(t) => Ok(*t),
            None => bail!("Unknown image type: {:?}", s),
        }
    }
}

/// Special game semantics attached to a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Bonus,
    Scatter,
    Wild,
}

/// A single image shown on the reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotImage {
    pub id: u32,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// Opaque asset reference, resolved outside the store
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl SlotImage {
    pub fn new(id: u32, image_type: ImageType, src: impl Into<String>) -> Self {
        Self {
            id,
            image_type,
            src: src.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }
}

/// Identity used to look up an entry in the store.
/// In JSON a number is an id and a string is a type tag, so `9` and `"9"`
/// are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageKey {
    Id(u32),
    Type(ImageType),
}

impl ImageKey {
    pub fn matches(&self, image: &SlotImage) -> bool {
        match self {
            ImageKey::Id(id) => image.id == *id,
            ImageKey::Type(t) => image.image_type == *t,
        }
    }
}

impl From<u32> for ImageKey {
    fn from(id: u32) -> Self {
        ImageKey::Id(id)
    }
}

impl From<ImageType> for ImageKey {
    fn from(t: ImageType) -> Self {
        ImageKey::Type(t)
    }
}
