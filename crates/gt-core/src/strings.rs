//! Display string catalogue.
//!
//! Every user-facing label goes through [`Strings`] so that a host can supply
//! translated text. [`English`] is the built-in catalogue.

/// Keys for every label the model renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    // Stages
    Planted,
    Germination,
    Seedling,
    Cutting,
    Vegetation,
    Flowering,
    Drying,
    Curing,
    Harvested,

    // Mediums
    Soil,
    Hydroponics,
    CocoCoir,
    Aeroponics,

    // Named actions
    ActionFim,
    ActionFlush,
    ActionFoliarFeed,
    ActionLst,
    ActionLollipop,
    ActionPesticideApplication,
    ActionTopped,
    ActionTransplanted,
    ActionTrim,

    // Summaries. Templates carry a single `%s` placeholder.
    PlantedAgo,
    WateredAgo,
    LastWateredAgo,
    Additives,
    SummaryPh,
    SummaryOutPh,
    SummaryAmount,
    SummaryTemp,
    SummaryAdditives,
}

/// Source of display strings.
pub trait Strings {
    /// Returns the text for `key`.
    fn get(&self, key: StringKey) -> &str;

    /// Returns the text for `key` with its `%s` placeholder replaced by `arg`.
    fn format(&self, key: StringKey, arg: &str) -> String {
        self.get(key).replacen("%s", arg, 1)
    }
}

/// Built-in English catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Strings for English {
    fn get(&self, key: StringKey) -> &str {
        match key {
            StringKey::Planted => "Planted",
            StringKey::Germination => "Germination",
            StringKey::Seedling => "Seedling",
            StringKey::Cutting => "Cutting",
            StringKey::Vegetation => "Vegetation",
            StringKey::Flowering => "Flowering",
            StringKey::Drying => "Drying",
            StringKey::Curing => "Curing",
            StringKey::Harvested => "Harvested",
            StringKey::Soil => "Soil",
            StringKey::Hydroponics => "Hydroponics",
            StringKey::CocoCoir => "Coco coir",
            StringKey::Aeroponics => "Aeroponics",
            StringKey::ActionFim => "FIM",
            StringKey::ActionFlush => "Flush",
            StringKey::ActionFoliarFeed => "Foliar feed",
            StringKey::ActionLst => "LST",
            StringKey::ActionLollipop => "Lollipop",
            StringKey::ActionPesticideApplication => "Pesticide application",
            StringKey::ActionTopped => "Topped",
            StringKey::ActionTransplanted => "Transplanted",
            StringKey::ActionTrim => "Trim",
            StringKey::PlantedAgo => "Planted %s ago",
            StringKey::WateredAgo => "Watered %s ago",
            StringKey::LastWateredAgo => "Last watered %s ago",
            StringKey::Additives => "additives",
            StringKey::SummaryPh => "In pH: ",
            StringKey::SummaryOutPh => "Out pH: ",
            StringKey::SummaryAmount => "Amount: ",
            StringKey::SummaryTemp => "Temp: ",
            StringKey::SummaryAdditives => "Additives: ",
        }
    }
}
