//! Plant records, garden analytics and garden health checks

pub mod analytics;
pub mod health;
pub mod plant;
pub mod seeds;

pub use analytics::{Garden, GardenEvent, GardenManager, GardenStats};
pub use health::{
    check_plant_health, check_temperature, water_plants, GardenManagement, TrackedPlant,
    WateringReport, WateringSystem,
};
pub use plant::{capitalize, Bloom, Plant, PlantCategory, Prize, SecurePlant, TreeTraits, VegetableTraits};
pub use seeds::{seed_inventory, SeedUnit};
