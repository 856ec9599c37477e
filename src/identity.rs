//! Mod identity and the fixed CK3 tag vocabulary.

use indexmap::IndexSet;

/// The tag vocabulary recognized by the game's mod browser.
pub const MOD_TAGS: [&str; 21] = [
    "Alternative History",
    "Balance",
    "Bookmarks",
    "Character Focuses",
    "Character Interactions",
    "Culture",
    "Decisions",
    "Events",
    "Fixes",
    "Gameplay",
    "Graphics",
    "Historical",
    "Map",
    "Portraits",
    "Religion",
    "Schemes",
    "Sound",
    "Total Conversion",
    "Translation",
    "Utilities",
    "Warfare",
];

/// Tag substituted when the user selected none, so the descriptor never
/// carries an empty tag block.
pub const DEFAULT_TAG: &str = "Fixes";

/// Returns true if the tag belongs to the fixed vocabulary.
pub fn is_known_tag(tag: &str) -> bool {
    MOD_TAGS.contains(&tag)
}

/// User-supplied identity of the mod being scaffolded.
///
/// `short_name` determines the destination folder and file names; `tags`
/// preserves selection order, which is also the emission order in the
/// descriptor tag block.
#[derive(Debug, Clone)]
pub struct ModIdentity {
    /// Full display name of the mod
    pub name: String,
    /// Lowercase, underscore-safe unique identifier
    pub short_name: String,
    /// Selected tags, in selection order
    pub tags: IndexSet<String>,
    /// Game version the mod supports; `None` emits the literal `TODO`
    pub supported_version: Option<String>,
}

impl ModIdentity {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            tags: IndexSet::new(),
            supported_version: None,
        }
    }

    /// Returns the tags to emit, substituting [`DEFAULT_TAG`] when the
    /// selection is empty.
    pub fn effective_tags(&self) -> Vec<&str> {
        if self.tags.is_empty() {
            vec![DEFAULT_TAG]
        } else {
            self.tags.iter().map(String::as_str).collect()
        }
    }
}
