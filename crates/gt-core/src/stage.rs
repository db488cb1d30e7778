//! Plant lifecycle stages and growing mediums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::strings::{StringKey, Strings};
use crate::types::ValidationError;

/// A phase in a plant's lifecycle.
///
/// Variants are declared in lifecycle order and `Ord` follows that order, so
/// comparing two stages compares how far along the plant is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlantStage {
    #[default]
    Planted,
    Germination,
    Seedling,
    Cutting,
    Vegetation,
    Flower,
    Drying,
    Curing,
    Harvested,
}

impl PlantStage {
    /// All stages in lifecycle order.
    pub const ALL: [Self; 9] = [
        Self::Planted,
        Self::Germination,
        Self::Seedling,
        Self::Cutting,
        Self::Vegetation,
        Self::Flower,
        Self::Drying,
        Self::Curing,
        Self::Harvested,
    ];

    /// Name used in exported journal files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planted => "PLANTED",
            Self::Germination => "GERMINATION",
            Self::Seedling => "SEEDLING",
            Self::Cutting => "CUTTING",
            Self::Vegetation => "VEGETATION",
            Self::Flower => "FLOWER",
            Self::Drying => "DRYING",
            Self::Curing => "CURING",
            Self::Harvested => "HARVESTED",
        }
    }

    /// Catalogue key for the printed label.
    #[must_use]
    pub const fn label_key(&self) -> StringKey {
        match self {
            Self::Planted => StringKey::Planted,
            Self::Germination => StringKey::Germination,
            Self::Seedling => StringKey::Seedling,
            Self::Cutting => StringKey::Cutting,
            Self::Vegetation => StringKey::Vegetation,
            Self::Flower => StringKey::Flowering,
            Self::Drying => StringKey::Drying,
            Self::Curing => StringKey::Curing,
            Self::Harvested => StringKey::Harvested,
        }
    }

    /// Printed label from the given catalogue.
    pub fn label<'a>(&self, strings: &'a dyn Strings) -> &'a str {
        strings.get(self.label_key())
    }

    /// Printed labels of every stage, in lifecycle order.
    pub fn names(strings: &dyn Strings) -> Vec<String> {
        Self::ALL
            .iter()
            .map(|stage| stage.label(strings).to_string())
            .collect()
    }

    /// Finds the stage whose printed label is exactly `label`.
    pub fn from_label(strings: &dyn Strings, label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.label(strings) == label)
    }

    /// Lower-cased first letter of the printed label, used as a compact suffix
    /// ("12f" for twelve days in flower).
    pub fn initial(&self, strings: &dyn Strings) -> String {
        self.label(strings)
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for PlantStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlantStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "plant stage",
                value: s.to_string(),
            })
    }
}

/// What the plant is grown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlantMedium {
    #[default]
    Soil,
    Hydro,
    Coco,
    Aero,
}

impl PlantMedium {
    /// All mediums in selection order.
    pub const ALL: [Self; 4] = [Self::Soil, Self::Hydro, Self::Coco, Self::Aero];

    /// Catalogue key for the printed label.
    #[must_use]
    pub const fn label_key(&self) -> StringKey {
        match self {
            Self::Soil => StringKey::Soil,
            Self::Hydro => StringKey::Hydroponics,
            Self::Coco => StringKey::CocoCoir,
            Self::Aero => StringKey::Aeroponics,
        }
    }

    /// Printed label from the given catalogue.
    pub fn label<'a>(&self, strings: &'a dyn Strings) -> &'a str {
        strings.get(self.label_key())
    }

    /// Printed labels of every medium, in selection order.
    pub fn names(strings: &dyn Strings) -> Vec<String> {
        Self::ALL
            .iter()
            .map(|medium| medium.label(strings).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::English;

    #[test]
    fn stages_order_by_lifecycle() {
        assert!(PlantStage::Planted < PlantStage::Seedling);
        assert!(PlantStage::Flower < PlantStage::Harvested);
        let mut shuffled = vec![
            PlantStage::Curing,
            PlantStage::Planted,
            PlantStage::Vegetation,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                PlantStage::Planted,
                PlantStage::Vegetation,
                PlantStage::Curing
            ]
        );
    }

    #[test]
    fn stage_serializes_as_export_name() {
        assert_eq!(
            serde_json::to_string(&PlantStage::Flower).unwrap(),
            "\"FLOWER\""
        );
        let parsed: PlantStage = serde_json::from_str("\"GERMINATION\"").unwrap();
        assert_eq!(parsed, PlantStage::Germination);
    }

    #[test]
    fn display_and_from_str_agree() {
        for stage in PlantStage::ALL {
            let parsed: PlantStage = stage.to_string().parse().expect("should parse");
            assert_eq!(parsed, stage);
        }
        assert_eq!("flower".parse::<PlantStage>().unwrap(), PlantStage::Flower);
    }

    #[test]
    fn unknown_stage_errors() {
        let err = "blooming".parse::<PlantStage>().unwrap_err();
        assert_eq!(err.to_string(), "unknown plant stage: blooming");
    }

    #[test]
    fn from_label_reverses_names() {
        assert_eq!(
            PlantStage::from_label(&English, "Flowering"),
            Some(PlantStage::Flower)
        );
        assert_eq!(PlantStage::from_label(&English, "flowering"), None);
    }

    #[test]
    fn names_follow_declaration_order() {
        let names = PlantStage::names(&English);
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Planted");
        assert_eq!(names[8], "Harvested");
        assert_eq!(
            PlantMedium::names(&English),
            vec!["Soil", "Hydroponics", "Coco coir", "Aeroponics"]
        );
    }

    #[test]
    fn initial_is_lowercase_first_letter() {
        assert_eq!(PlantStage::Vegetation.initial(&English), "v");
        assert_eq!(PlantStage::Flower.initial(&English), "f");
    }

    #[test]
    fn medium_serializes_as_export_name() {
        assert_eq!(
            serde_json::to_string(&PlantMedium::Coco).unwrap(),
            "\"COCO\""
        );
        assert_eq!(PlantMedium::default(), PlantMedium::Soil);
    }

    #[test]
    fn medium_labels_follow_selection_order() {
        assert_eq!(
            PlantMedium::names(&English),
            vec!["Soil", "Hydroponics", "Coco coir", "Aeroponics"]
        );
        assert_eq!(PlantMedium::Aero.label_key(), StringKey::Aeroponics);
    }
}
