use crate::error::{NexusError, NexusResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flower colour and whether it is currently in bloom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bloom {
    pub color: String,
    pub blooming: bool,
}

/// Competition points awarded to a flower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeTraits {
    pub trunk_diameter_cm: u32,
    pub shade_m2: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegetableTraits {
    pub harvest_season: String,
    pub nutrient: String,
}

/// Scoring category derived from a plant's attribute groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantCategory {
    Regular,
    Flowering,
    Prize,
}

/// A plant record
///
/// Flowers, prize flowers, trees and vegetables are all plain `Plant`s;
/// what sets them apart is which optional attribute groups are present.
///
/// # Example
/// ```
/// use nexus_lib::garden::{Plant, PlantCategory};
///
/// let sunflower = Plant::new("Sunflower", 50, 45)
///     .with_bloom("yellow", true)
///     .with_prize(10);
/// assert_eq!(sunflower.category(), PlantCategory::Prize);
/// assert_eq!(
///     sunflower.to_string(),
///     "Sunflower: 50cm, yellow flowers (blooming), Prize points: 10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub height_cm: u32,
    pub age_days: u32,
    /// Centimetres added through `grow` since creation
    pub grown_cm: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom: Option<Bloom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<Prize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeTraits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetable: Option<VegetableTraits>,
}

impl Plant {
    pub fn new(name: impl Into<String>, height_cm: u32, age_days: u32) -> Self {
        Self {
            name: name.into(),
            height_cm,
            age_days,
            grown_cm: 0,
            bloom: None,
            prize: None,
            tree: None,
            vegetable: None,
        }
    }

    pub fn with_bloom(mut self, color: impl Into<String>, blooming: bool) -> Self {
        self.bloom = Some(Bloom {
            color: color.into(),
            blooming,
        });
        self
    }

    pub fn with_prize(mut self, points: u32) -> Self {
        self.prize = Some(Prize { points });
        self
    }

    pub fn with_tree(mut self, trunk_diameter_cm: u32, shade_m2: u32) -> Self {
        self.tree = Some(TreeTraits {
            trunk_diameter_cm,
            shade_m2,
        });
        self
    }

    pub fn with_vegetable(
        mut self,
        harvest_season: impl Into<String>,
        nutrient: impl Into<String>,
    ) -> Self {
        self.vegetable = Some(VegetableTraits {
            harvest_season: harvest_season.into(),
            nutrient: nutrient.into(),
        });
        self
    }

    /// A prize plant counts as flowering too
    pub fn category(&self) -> PlantCategory {
        match (&self.bloom, &self.prize) {
            (_, Some(_)) => PlantCategory::Prize,
            (Some(_), None) => PlantCategory::Flowering,
            (None, None) => PlantCategory::Regular,
        }
    }

    pub fn is_flowering(&self) -> bool {
        self.category() != PlantCategory::Regular
    }

    pub fn prize_points(&self) -> u32 {
        self.prize.map(|p| p.points).unwrap_or(0)
    }

    pub fn grow(&mut self, cm: u32) {
        self.height_cm += cm;
        self.grown_cm += cm;
    }

    pub fn age_by(&mut self, days: u32) {
        self.age_days += days;
    }

    /// `"Rose: 25cm 30 days old"`
    pub fn blueprint(&self) -> String {
        format!("{}: {}cm {} days old", self.name, self.height_cm, self.age_days)
    }

    /// One line profile naming the plant's kind and its kind specific detail
    pub fn profile(&self) -> String {
        if let Some(tree) = &self.tree {
            format!(
                "{} (Tree): {}cm, {} days, {}cm diameter",
                self.name, self.height_cm, self.age_days, tree.trunk_diameter_cm
            )
        } else if let Some(vegetable) = &self.vegetable {
            format!(
                "{} (Vegetable): {}cm, {} days, {} harvest",
                self.name, self.height_cm, self.age_days, vegetable.harvest_season
            )
        } else if let Some(bloom) = &self.bloom {
            format!(
                "{} (Flower): {}cm, {} days, {} color",
                self.name, self.height_cm, self.age_days, bloom.color
            )
        } else {
            self.blueprint()
        }
    }

    /// Sentences describing what each attribute group contributes
    pub fn traits(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(bloom) = &self.bloom {
            if bloom.blooming {
                lines.push(format!("{} is blooming beautifully!", self.name));
            }
        }
        if let Some(tree) = &self.tree {
            lines.push(format!(
                "{} provides {} square meters of shade",
                self.name, tree.shade_m2
            ));
        }
        if let Some(vegetable) = &self.vegetable {
            lines.push(format!(
                "{} is rich in vitamin {}",
                self.name, vegetable.nutrient
            ));
        }
        lines
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}cm", self.name, self.height_cm)?;
        if let Some(bloom) = &self.bloom {
            let state = if bloom.blooming {
                "blooming"
            } else {
                "not blooming"
            };
            write!(f, ", {} flowers ({})", bloom.color, state)?;
        }
        if let Some(prize) = &self.prize {
            write!(f, ", Prize points: {}", prize.points)?;
        }
        Ok(())
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A plant whose measurements can only be changed through validated setters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurePlant {
    name: String,
    height_cm: u32,
    age_days: u32,
}

impl SecurePlant {
    pub fn new(name: &str) -> Self {
        Self {
            name: capitalize(name),
            height_cm: 0,
            age_days: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> u32 {
        self.height_cm
    }

    pub fn age(&self) -> u32 {
        self.age_days
    }

    /// # Errors
    /// Negative heights are rejected with `InvalidValue` and leave the plant
    /// unchanged.
    pub fn set_height(&mut self, height: i64) -> NexusResult<()> {
        self.height_cm = checked("height", height)?;
        Ok(())
    }

    /// # Errors
    /// Negative ages are rejected with `InvalidValue` and leave the plant
    /// unchanged.
    pub fn set_age(&mut self, age: i64) -> NexusResult<()> {
        self.age_days = checked("age", age)?;
        Ok(())
    }

    pub fn info(&self) -> String {
        format!("{} ({}cm, {} days)", self.name, self.height_cm, self.age_days)
    }
}

fn checked(field: &str, value: i64) -> NexusResult<u32> {
    if value < 0 {
        return Err(NexusError::InvalidValue(format!(
            "Negative {} rejected: {}",
            field, value
        )));
    }
    u32::try_from(value)
        .map_err(|_| NexusError::InvalidValue(format!("{} {} is too large", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Plant::new("Oak", 100, 1).category(), PlantCategory::Regular);
        assert_eq!(
            Plant::new("Rose", 25, 1).with_bloom("red", true).category(),
            PlantCategory::Flowering
        );
        let daisy = Plant::new("Daisy", 12, 1).with_bloom("white", true).with_prize(10);
        assert_eq!(daisy.category(), PlantCategory::Prize);
        assert!(daisy.is_flowering());
        assert_eq!(daisy.prize_points(), 10);
    }

    #[test]
    fn test_grow_and_age() {
        let mut rose = Plant::new("Rose", 25, 30);
        assert_eq!(rose.blueprint(), "Rose: 25cm 30 days old");

        rose.grow(6);
        rose.age_by(6);
        assert_eq!(rose.blueprint(), "Rose: 31cm 36 days old");
        assert_eq!(rose.grown_cm, 6);
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(Plant::new("Oak Tree", 101, 0).to_string(), "Oak Tree: 101cm");
        assert_eq!(
            Plant::new("Tulip", 20, 0).with_bloom("pink", false).to_string(),
            "Tulip: 20cm, pink flowers (not blooming)"
        );
    }

    #[test]
    fn test_profiles_and_traits() {
        let oak = Plant::new("Oak", 500, 1825).with_tree(50, 78);
        assert_eq!(oak.profile(), "Oak (Tree): 500cm, 1825 days, 50cm diameter");
        assert_eq!(oak.traits(), vec!["Oak provides 78 square meters of shade"]);

        let tomato = Plant::new("Tomato", 80, 90).with_vegetable("summer", "C");
        assert_eq!(tomato.profile(), "Tomato (Vegetable): 80cm, 90 days, summer harvest");
        assert_eq!(tomato.traits(), vec!["Tomato is rich in vitamin C"]);

        let rose = Plant::new("Rose", 25, 30).with_bloom("red", true);
        assert_eq!(rose.profile(), "Rose (Flower): 25cm, 30 days, red color");
        assert_eq!(rose.traits(), vec!["Rose is blooming beautifully!"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rose"), "Rose");
        assert_eq!(capitalize("oAK"), "Oak");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_secure_plant_rejects_negatives() {
        let mut rose = SecurePlant::new("rose");
        rose.set_height(25).unwrap();
        rose.set_age(30).unwrap();

        let err = rose.set_height(-5).unwrap_err();
        assert!(matches!(err, NexusError::InvalidValue(_)));
        assert!(rose.set_age(-1).is_err());

        assert_eq!(rose.info(), "Rose (25cm, 30 days)");
    }

    #[test]
    fn test_plant_serializes_without_empty_groups() {
        let json = serde_json::to_value(Plant::new("Fern", 15, 120)).unwrap();
        assert!(json.get("bloom").is_none());
        assert_eq!(json["height_cm"], serde_json::json!(15));
    }
}
