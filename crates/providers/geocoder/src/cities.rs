use std::sync::OnceLock;

use indexmap::IndexMap;
use thiserror::Error;

const BUILTIN_PRESETS: &str = include_str!("../assets/cities.toml");

/// Label of the single section created for ungrouped city lists.
pub const DEFAULT_GROUP_LABEL: &str = "Cities";

/// Errors raised while reading a city preset table.
#[derive(Debug, Error)]
pub enum CityPresetError {
    #[error("city presets could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("city presets contain no cities")]
    Empty,
}

#[derive(Debug, serde::Deserialize)]
struct RawPresets {
    #[serde(default)]
    groups: IndexMap<String, Vec<String>>,
}

/// City names offered by the geocoding picker, grouped into ordered sections.
///
/// Two configuration shapes are accepted, matching the widget's options: a
/// sectioned table (`groups`) or a flat list collapsed into one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityPresets {
    groups: IndexMap<String, Vec<String>>,
}

impl CityPresets {
    /// The preset table compiled into the crate.
    pub fn builtin() -> &'static CityPresets {
        static BUILTIN: OnceLock<CityPresets> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_toml_str(BUILTIN_PRESETS).expect("builtin city presets are valid")
        })
    }

    /// Parse a preset table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CityPresetError`] when the document does not parse or holds
    /// no cities at all.
    pub fn from_toml_str(text: &str) -> Result<Self, CityPresetError> {
        let raw: RawPresets = toml::from_str(text)?;
        Self::from_groups(raw.groups)
    }

    /// Build presets from already grouped sections.
    ///
    /// # Errors
    ///
    /// Returns [`CityPresetError::Empty`] when every section is empty.
    pub fn from_groups(groups: IndexMap<String, Vec<String>>) -> Result<Self, CityPresetError> {
        if groups.values().all(Vec::is_empty) {
            return Err(CityPresetError::Empty);
        }
        Ok(Self { groups })
    }

    /// Build presets from a flat city list under [`DEFAULT_GROUP_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns [`CityPresetError::Empty`] when the list is empty.
    pub fn from_list(cities: Vec<String>) -> Result<Self, CityPresetError> {
        let mut groups = IndexMap::new();
        groups.insert(DEFAULT_GROUP_LABEL.to_string(), cities);
        Self::from_groups(groups)
    }

    /// Iterate over `(section label, cities)` pairs in configured order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.groups
            .iter()
            .map(|(label, cities)| (label.as_str(), cities.as_slice()))
    }

    /// Whether `city` appears in any section.
    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.groups.values().any(|cities| {
            cities
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(city))
        })
    }

    /// The first configured city; seeds the widget's header label.
    #[must_use]
    pub fn first_city(&self) -> Option<&str> {
        self.groups
            .values()
            .flat_map(|cities| cities.iter())
            .map(String::as_str)
            .next()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}
