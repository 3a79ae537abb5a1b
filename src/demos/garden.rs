use crate::error::{NexusError, NexusResult};
use crate::garden::{
    capitalize, seed_inventory, GardenEvent, GardenManager, Plant, SecurePlant, SeedUnit,
};
use std::io::Write;

pub fn run_intro<W: Write>(out: &mut W) -> NexusResult<()> {
    let plant = Plant::new("Rose", 25, 30);
    writeln!(out, "=== Welcome to My Garden ===")?;
    writeln!(out, "Plant: {}", plant.name)?;
    writeln!(out, "Height: {}cm", plant.height_cm)?;
    writeln!(out, "Age: {} days", plant.age_days)?;
    writeln!(out, "=== End of Program ===")?;
    Ok(())
}

pub fn run_data<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Plant Registry ===")?;
    let mut registry = vec![Plant::new("Rose", 25, 30), Plant::new("Sunflower", 80, 45)];
    registry.push(Plant::new("Cactus", 15, 120));
    for plant in &registry {
        writeln!(out, "{}", plant.blueprint())?;
    }
    Ok(())
}

pub fn run_growth<W: Write>(out: &mut W) -> NexusResult<()> {
    let days = 6;
    let mut rose = Plant::new("Rose", 25, 30);

    writeln!(out, "=== Day 1 ===")?;
    writeln!(out, "{}", rose.blueprint())?;
    rose.grow(days);
    rose.age_by(days);
    writeln!(out, "=== Day {} ===", days + 1)?;
    writeln!(out, "{}", rose.blueprint())?;
    writeln!(out, "Growth this week: +{}cm", rose.grown_cm)?;
    Ok(())
}

pub fn run_factory<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Plant Factory Output ===")?;
    let specs = [
        ("Rose", 25, 30),
        ("Cactus", 200, 365),
        ("Cactus", 5, 90),
        ("Sunflower", 80, 45),
        ("Fern", 15, 120),
    ];
    let mut created = Vec::with_capacity(specs.len());
    for (name, height, age) in specs {
        let plant = Plant::new(name, height, age);
        writeln!(out, "Created: {}", plant.blueprint())?;
        created.push(plant);
    }
    writeln!(out, "\nTotal plants created: {}", created.len())?;
    Ok(())
}

pub fn run_security<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Security System ===")?;
    let mut rose = SecurePlant::new("rose");
    writeln!(out, "Plant created: {}", rose.name())?;

    let updates: [(&str, i64); 3] = [("height", 25), ("age", 30), ("height", -5)];
    for (field, value) in updates {
        let result = match field {
            "height" => rose.set_height(value),
            _ => rose.set_age(value),
        };
        match result {
            Ok(()) if field == "height" => writeln!(out, "Height updated: {}cm [OK]", value)?,
            Ok(()) => writeln!(out, "Age updated: {} days [OK]", value)?,
            Err(NexusError::InvalidValue(_)) => {
                writeln!(out, "\nInvalid operation attempted: {} {} [REJECTED]", field, value)?;
                writeln!(out, "Security: Negative {} rejected", field)?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "\nCurrent plant: {}", rose.info())?;
    Ok(())
}

pub fn run_types<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Plant Types ===\n")?;
    let plants = [
        Plant::new(capitalize("rose"), 25, 30).with_bloom("red", true),
        Plant::new(capitalize("oak"), 500, 1825).with_tree(50, 78),
        Plant::new(capitalize("tomato"), 80, 90).with_vegetable("summer", "C"),
    ];
    for (index, plant) in plants.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", plant.profile())?;
        for line in plant.traits() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub fn run_analytics<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Management System Demo ===\n")?;
    let manager = GardenManager::create_garden_network();

    for garden in manager.gardens() {
        for event in garden.history() {
            if matches!(event, GardenEvent::Helping { .. }) {
                writeln!(out)?;
            }
            writeln!(out, "{}", event)?;
        }
    }

    for garden in manager.gardens() {
        writeln!(out, "\n=== {}'s Garden Report ===", garden.owner())?;
        writeln!(out, "Plants in garden:")?;
        for plant in garden.plants() {
            writeln!(out, "- {}", plant)?;
        }
        writeln!(out, "\n{}", garden.stats())?;
    }

    writeln!(
        out,
        "\nHeight validation test: {}",
        GardenManager::validate_height(1.0)
    )?;
    let scores = manager.garden_scores();
    let score_of = |owner: &str| scores.get(owner).copied().unwrap_or(0);
    writeln!(
        out,
        "Garden scores - Alice: {}, Bob: {}",
        score_of("Alice"),
        score_of("Bob")
    )?;
    writeln!(out, "Total gardens managed: {}", manager.total_gardens())?;
    Ok(())
}

pub fn run_seeds<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Seed Inventory ===")?;
    let stock = [
        ("tomato", 15, "packets"),
        ("carrot", 8, "grams"),
        ("lettuce", 12, "area"),
        ("basil", 3, "bushels"),
    ];
    for (seed, quantity, unit) in stock {
        match unit.parse::<SeedUnit>() {
            Ok(unit) => writeln!(out, "{}", seed_inventory(seed, quantity, unit))?,
            Err(_) => writeln!(out, "Unknown unit type")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> NexusResult<()>,
    {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_intro() {
        assert_eq!(
            capture(run_intro),
            "=== Welcome to My Garden ===\nPlant: Rose\nHeight: 25cm\nAge: 30 days\n=== End of Program ===\n"
        );
    }

    #[test]
    fn test_growth() {
        let text = capture(run_growth);
        assert!(text.contains("=== Day 7 ===\nRose: 31cm 36 days old\n"));
        assert!(text.ends_with("Growth this week: +6cm\n"));
    }

    #[test]
    fn test_factory_counts() {
        let text = capture(run_factory);
        assert_eq!(text.matches("Created: ").count(), 5);
        assert!(text.ends_with("Total plants created: 5\n"));
    }

    #[test]
    fn test_security_rejects_negative_height() {
        let text = capture(run_security);
        assert!(text.contains("Invalid operation attempted: height -5 [REJECTED]"));
        assert!(text.ends_with("Current plant: Rose (25cm, 30 days)\n"));
    }

    #[test]
    fn test_types() {
        let text = capture(run_types);
        assert!(text.contains("Rose (Flower): 25cm, 30 days, red color\nRose is blooming beautifully!\n"));
        assert!(text.contains("Oak provides 78 square meters of shade"));
        assert!(text.contains("Tomato is rich in vitamin C"));
    }

    #[test]
    fn test_analytics_report() {
        let text = capture(run_analytics);
        assert!(text.contains("\nAlice is helping all plants grow...\nOak Tree grew 1cm\n"));
        assert!(text.contains("- Sunflower: 51cm, yellow flowers (blooming), Prize points: 10"));
        assert!(text.contains("Plant types: 1 regular, 0 flowering, 1 prize flowers"));
        assert!(text.contains("Garden scores - Alice: 218, Bob: 92"));
        assert!(text.ends_with("Total gardens managed: 2\n"));
    }

    #[test]
    fn test_seeds() {
        let text = capture(run_seeds);
        assert!(text.contains("Carrot seeds: 8 grams total"));
        assert!(text.ends_with("Unknown unit type\n"));
    }
}
