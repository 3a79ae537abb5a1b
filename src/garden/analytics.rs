use super::plant::{Plant, PlantCategory};
use crate::error::{NexusError, NexusResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Something that happened in a garden, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GardenEvent {
    Added { plant: String, owner: String },
    Helping { owner: String },
    Grew { plant: String, cm: u32 },
}

impl fmt::Display for GardenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GardenEvent::Added { plant, owner } => {
                write!(f, "Added {} to {}'s garden", plant, owner)
            }
            GardenEvent::Helping { owner } => {
                write!(f, "{} is helping all plants grow...", owner)
            }
            GardenEvent::Grew { plant, cm } => write!(f, "{} grew {}cm", plant, cm),
        }
    }
}

/// Counters for a single garden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GardenStats {
    pub plants_added: usize,
    pub total_growth_cm: u32,
    pub regular: usize,
    pub flowering: usize,
    pub prize: usize,
}

impl GardenStats {
    fn record(&mut self, category: PlantCategory) {
        self.plants_added += 1;
        match category {
            PlantCategory::Regular => self.regular += 1,
            PlantCategory::Flowering => self.flowering += 1,
            PlantCategory::Prize => self.prize += 1,
        }
    }
}

impl fmt::Display for GardenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Plants added: {}, Total growth: {}cm",
            self.plants_added, self.total_growth_cm
        )?;
        write!(
            f,
            "Plant types: {} regular, {} flowering, {} prize flowers",
            self.regular, self.flowering, self.prize
        )
    }
}

/// One owner's plants and the statistics about them
#[derive(Debug, Clone)]
pub struct Garden {
    owner: String,
    plants: Vec<Plant>,
    stats: GardenStats,
    history: Vec<GardenEvent>,
}

impl Garden {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            plants: Vec::new(),
            stats: GardenStats::default(),
            history: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn stats(&self) -> &GardenStats {
        &self.stats
    }

    pub fn history(&self) -> &[GardenEvent] {
        &self.history
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.stats.record(plant.category());
        self.history.push(GardenEvent::Added {
            plant: plant.name.clone(),
            owner: self.owner.clone(),
        });
        self.plants.push(plant);
    }

    /// Grow every plant by `cm`
    ///
    /// # Errors
    /// Returns `InvalidValue` for a negative increment; nothing grows.
    pub fn help_all_grow(&mut self, cm: i64) -> NexusResult<()> {
        if !GardenManager::validate_height(cm as f64) {
            return Err(NexusError::InvalidValue(format!(
                "growth must be non-negative, got {}cm",
                cm
            )));
        }
        let cm = u32::try_from(cm)
            .map_err(|_| NexusError::InvalidValue(format!("growth of {}cm is too large", cm)))?;
        self.grow_by(cm);
        Ok(())
    }

    fn grow_by(&mut self, cm: u32) {
        self.history.push(GardenEvent::Helping {
            owner: self.owner.clone(),
        });
        for plant in &mut self.plants {
            plant.grow(cm);
            self.stats.total_growth_cm += cm;
            self.history.push(GardenEvent::Grew {
                plant: plant.name.clone(),
                cm,
            });
        }
    }

    pub fn total_height_cm(&self) -> u32 {
        self.plants.iter().map(|p| p.height_cm).sum()
    }

    /// Flowering plants, prize flowers included
    pub fn flowering_count(&self) -> usize {
        self.plants.iter().filter(|p| p.is_flowering()).count()
    }

    pub fn total_prize_points(&self) -> u32 {
        self.plants.iter().map(Plant::prize_points).sum()
    }

    /// Total height + 10 per flowering plant + 2 per prize point
    pub fn score(&self) -> u32 {
        self.total_height_cm() + self.flowering_count() as u32 * 10 + self.total_prize_points() * 2
    }
}

/// Collection of gardens
#[derive(Debug, Clone, Default)]
pub struct GardenManager {
    gardens: Vec<Garden>,
}

impl GardenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alice's and Bob's gardens, with Alice's plants grown by 1cm
    pub fn create_garden_network() -> Self {
        let mut alice = Garden::new("Alice");
        alice.add_plant(Plant::new("Oak Tree", 100, 0));
        alice.add_plant(Plant::new("Rose", 25, 0).with_bloom("red", true));
        alice.add_plant(
            Plant::new("Sunflower", 50, 0)
                .with_bloom("yellow", true)
                .with_prize(10),
        );
        alice.grow_by(1);

        let mut bob = Garden::new("Bob");
        bob.add_plant(Plant::new("Bonsai", 50, 0));
        bob.add_plant(
            Plant::new("Prize Daisy", 12, 0)
                .with_bloom("white", true)
                .with_prize(10),
        );

        let mut manager = Self::new();
        manager.add_garden(alice);
        manager.add_garden(bob);
        manager
    }

    pub fn add_garden(&mut self, garden: Garden) {
        self.gardens.push(garden);
    }

    pub fn gardens(&self) -> &[Garden] {
        &self.gardens
    }

    pub fn total_gardens(&self) -> usize {
        self.gardens.len()
    }

    /// Non-negative, finite height increments are valid
    pub fn validate_height(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }

    pub fn garden_scores(&self) -> BTreeMap<String, u32> {
        self.gardens
            .iter()
            .map(|g| (g.owner.clone(), g.score()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_scores() {
        let manager = GardenManager::create_garden_network();
        let scores = manager.garden_scores();

        assert_eq!(manager.total_gardens(), 2);
        assert_eq!(scores["Alice"], 218);
        assert_eq!(scores["Bob"], 92);
    }

    #[test]
    fn test_stats_are_per_garden() {
        let manager = GardenManager::create_garden_network();
        let alice = &manager.gardens()[0];
        let bob = &manager.gardens()[1];

        assert_eq!(
            alice.stats(),
            &GardenStats {
                plants_added: 3,
                total_growth_cm: 3,
                regular: 1,
                flowering: 1,
                prize: 1,
            }
        );
        assert_eq!(bob.stats().plants_added, 2);
        assert_eq!(bob.stats().total_growth_cm, 0);
        assert_eq!(bob.stats().flowering, 0);
    }

    #[test]
    fn test_stats_display() {
        let manager = GardenManager::create_garden_network();
        assert_eq!(
            manager.gardens()[0].stats().to_string(),
            "Plants added: 3, Total growth: 3cm\nPlant types: 1 regular, 1 flowering, 1 prize flowers"
        );
    }

    #[test]
    fn test_history_order() {
        let manager = GardenManager::create_garden_network();
        let lines: Vec<String> = manager.gardens()[0]
            .history()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "Added Oak Tree to Alice's garden",
                "Added Rose to Alice's garden",
                "Added Sunflower to Alice's garden",
                "Alice is helping all plants grow...",
                "Oak Tree grew 1cm",
                "Rose grew 1cm",
                "Sunflower grew 1cm",
            ]
        );
    }

    #[test]
    fn test_negative_growth_rejected() {
        let mut garden = Garden::new("Carol");
        garden.add_plant(Plant::new("Fern", 15, 0));

        assert!(garden.help_all_grow(-2).is_err());
        assert_eq!(garden.total_height_cm(), 15);
        assert_eq!(garden.history().len(), 1);
    }

    #[test]
    fn test_validate_height() {
        assert!(GardenManager::validate_height(1.0));
        assert!(GardenManager::validate_height(0.0));
        assert!(!GardenManager::validate_height(-0.5));
        assert!(!GardenManager::validate_height(f64::NAN));
    }

    #[test]
    fn test_separate_gardens_do_not_share_counters() {
        let mut first = Garden::new("A");
        let second = Garden::new("B");
        first.add_plant(Plant::new("Fern", 1, 0));
        assert_eq!(first.stats().plants_added, 1);
        assert_eq!(second.stats().plants_added, 0);
    }
}
