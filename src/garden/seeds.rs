use super::plant::capitalize;
use crate::error::NexusError;
use std::str::FromStr;

/// How a seed quantity is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedUnit {
    Packets,
    Grams,
    Area,
}

impl FromStr for SeedUnit {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "packets" => Ok(SeedUnit::Packets),
            "grams" => Ok(SeedUnit::Grams),
            "area" => Ok(SeedUnit::Area),
            _ => Err(NexusError::InvalidValue("Unknown unit type".to_string())),
        }
    }
}

/// Inventory line for a seed type, e.g. `"Tomato seeds: 15 packets available"`
pub fn seed_inventory(seed_type: &str, quantity: u32, unit: SeedUnit) -> String {
    let name = capitalize(seed_type);
    match unit {
        SeedUnit::Packets => format!("{} seeds: {} packets available", name, quantity),
        SeedUnit::Grams => format!("{} seeds: {} grams total", name, quantity),
        SeedUnit::Area => format!("{} seeds: covers {} square meters", name, quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lines() {
        assert_eq!(
            seed_inventory("tomato", 15, SeedUnit::Packets),
            "Tomato seeds: 15 packets available"
        );
        assert_eq!(
            seed_inventory("carrot", 8, SeedUnit::Grams),
            "Carrot seeds: 8 grams total"
        );
        assert_eq!(
            seed_inventory("lettuce", 12, SeedUnit::Area),
            "Lettuce seeds: covers 12 square meters"
        );
    }

    #[test]
    fn test_unknown_unit() {
        let err = "bushels".parse::<SeedUnit>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: Unknown unit type");
    }
}
