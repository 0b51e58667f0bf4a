use crate::constants::DEFAULT_DWELL_MINUTES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity classification of a stop, used for icons and time estimates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    Beach,
    Museum,
    Dining,
    Hiking,
    Park,
    Shopping,
    Nightlife,
    Landmark,
    Gallery,
    Cafe,
    Attraction,
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VisitType::Beach => "beach",
            VisitType::Museum => "museum",
            VisitType::Dining => "dining",
            VisitType::Hiking => "hiking",
            VisitType::Park => "park",
            VisitType::Shopping => "shopping",
            VisitType::Nightlife => "nightlife",
            VisitType::Landmark => "landmark",
            VisitType::Gallery => "gallery",
            VisitType::Cafe => "cafe",
            VisitType::Attraction => "attraction",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beach" => Ok(VisitType::Beach),
            "museum" => Ok(VisitType::Museum),
            "dining" => Ok(VisitType::Dining),
            "hiking" => Ok(VisitType::Hiking),
            "park" => Ok(VisitType::Park),
            "shopping" => Ok(VisitType::Shopping),
            "nightlife" => Ok(VisitType::Nightlife),
            "landmark" => Ok(VisitType::Landmark),
            "gallery" => Ok(VisitType::Gallery),
            "cafe" => Ok(VisitType::Cafe),
            "attraction" => Ok(VisitType::Attraction),
            _ => Err(format!("Invalid visit type: {}", s)),
        }
    }
}

/// How one interest label maps onto a places search and onto stop metadata.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct InterestProfile {
    pub label: &'static str,
    /// Provider place type filter, if the provider has a matching one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_type: Option<&'static str>,
    pub keyword: &'static str,
    pub dwell_minutes: u32,
    pub visit_type: VisitType,
}

const fn profile(
    label: &'static str,
    place_type: Option<&'static str>,
    keyword: &'static str,
    dwell_minutes: u32,
    visit_type: VisitType,
) -> InterestProfile {
    InterestProfile {
        label,
        place_type,
        keyword,
        dwell_minutes,
        visit_type,
    }
}

/// Every interest a user can pick from.
pub const INTEREST_CATALOG: &[InterestProfile] = &[
    profile("Beaches", None, "beach", 120, VisitType::Beach),
    profile("Museums", Some("museum"), "museum", 90, VisitType::Museum),
    profile("Food", Some("restaurant"), "restaurant", 60, VisitType::Dining),
    profile("Hiking", Some("park"), "hiking trail", 180, VisitType::Hiking),
    profile("Parks", Some("park"), "park", 60, VisitType::Park),
    profile("Shopping", Some("shopping_mall"), "shopping", 90, VisitType::Shopping),
    profile("Nightlife", Some("night_club"), "nightlife", 120, VisitType::Nightlife),
    profile("History", Some("tourist_attraction"), "historic site", 60, VisitType::Landmark),
    profile("Art", Some("art_gallery"), "art gallery", 75, VisitType::Gallery),
    profile("Coffee", Some("cafe"), "coffee", 45, VisitType::Cafe),
];

/// Catalog entry for a label, matched case-insensitively.
pub fn find_interest(label: &str) -> Option<&'static InterestProfile> {
    let label = label.trim();
    INTEREST_CATALOG
        .iter()
        .find(|profile| profile.label.eq_ignore_ascii_case(label))
}

/// Suggested time at a stop found through `label`.
pub fn dwell_minutes_for(label: &str) -> u32 {
    find_interest(label)
        .map(|profile| profile.dwell_minutes)
        .unwrap_or(DEFAULT_DWELL_MINUTES)
}

pub fn visit_type_for(label: &str) -> VisitType {
    find_interest(label)
        .map(|profile| profile.visit_type)
        .unwrap_or(VisitType::Attraction)
}
