use serde::{Deserialize, Serialize};

/// Normalized ingredient identity used to look up vendor product pools,
/// distinct from the free-text recipe name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a free-text ingredient name to a canonical key. Kept behind a trait
/// so the dictionary heuristic can be swapped for a real catalog search
/// without touching the aggregator or matcher.
pub trait Canonicalizer: Send + Sync {
    fn canonicalize(&self, name: &str) -> Option<CanonicalKey>;
}

/// String-heuristic canonicalizer: exact dictionary hit, then a dictionary
/// key appearing inside the whole name, then a per-token scan.
#[derive(Debug, Clone)]
pub struct DictionaryCanonicalizer {
    keys: Vec<String>,
}

impl DictionaryCanonicalizer {
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Dictionary covering the seeded vendor catalogs.
    pub fn seeded() -> Self {
        Self::new([
            "mozzarella",
            "parmesan",
            "chicken",
            "beef",
            "salmon",
            "flour",
            "tomato",
            "basil",
            "olive oil",
            "egg",
            "milk",
            "butter",
            "onion",
            "garlic",
            "pasta",
            "rice",
            "potato",
            "lemon",
        ])
    }
}

impl Canonicalizer for DictionaryCanonicalizer {
    fn canonicalize(&self, name: &str) -> Option<CanonicalKey> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        for key in &self.keys {
            if normalized == *key || normalized.contains(key.as_str()) {
                return Some(CanonicalKey::new(key.clone()));
            }
        }

        for token in normalized.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if let Some(key) = self.keys.iter().find(|key| key.as_str() == token) {
                return Some(CanonicalKey::new(key.clone()));
            }
        }

        None
    }
}
