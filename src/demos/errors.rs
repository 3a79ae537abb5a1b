use crate::config::NexusConfig;
use crate::error::{GardenError, NexusError, NexusResult};
use crate::garden::{check_plant_health, check_temperature, water_plants, GardenManagement, TrackedPlant};
use std::collections::HashMap;
use std::io::Write;

pub fn run_temperature<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Temperature Checker ===")?;
    for input in ["25", "abc", "100", "-50"] {
        writeln!(out, "\nTesting temperature: {}", input)?;
        match check_temperature(input) {
            Ok(t) => writeln!(out, "Temperature {}°C is perfect for plants!", t)?,
            Err(NexusError::InvalidValue(msg)) | Err(NexusError::Garden(GardenError::Temperature(msg))) => {
                writeln!(out, "Error: {}", msg)?
            }
            Err(e) => return Err(e),
        }
    }
    writeln!(out, "\nAll tests completed - program didn't crash!")?;
    Ok(())
}

fn parse_number() -> NexusResult<i32> {
    "abc"
        .parse::<i32>()
        .map_err(|e| NexusError::InvalidValue(format!("'abc': {}", e)))
}

fn divide() -> NexusResult<i32> {
    10i32
        .checked_div(0)
        .ok_or_else(|| NexusError::InvalidValue("division by zero".to_string()))
}

fn open_missing() -> NexusResult<String> {
    let path = "non_existent_file.txt";
    std::fs::read_to_string(path).map_err(|e| NexusError::from_io(e, path))
}

fn lookup_missing() -> NexusResult<i32> {
    let plants: HashMap<&str, i32> = [("rose", 1), ("dahlia", 2)].into_iter().collect();
    plants
        .get("missing plant")
        .copied()
        .ok_or_else(|| NexusError::MissingKey("'missing plant'".to_string()))
}

/// One failing operation per error category, each caught where it happens
pub fn run_error_types<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Error Types Demo ===\n")?;

    writeln!(out, "Testing InvalidValue...")?;
    match parse_number() {
        Ok(n) => writeln!(out, "Converted integer: {}", n)?,
        Err(e) => writeln!(out, "Caught {}: {}\n", e.category(), e)?,
    }

    writeln!(out, "Testing division by zero...")?;
    match divide() {
        Ok(n) => writeln!(out, "Division result: {}", n)?,
        Err(e) => writeln!(out, "Caught {}: {}\n", e.category(), e)?,
    }

    writeln!(out, "Testing FileNotFound...")?;
    match open_missing() {
        Ok(content) => writeln!(out, "File content: {}", content)?,
        Err(e) => writeln!(out, "Caught {}: {}\n", e.category(), e)?,
    }

    writeln!(out, "Testing MissingKey...")?;
    match lookup_missing() {
        Ok(n) => writeln!(out, "Dictionary value: {}", n)?,
        Err(e) => writeln!(out, "Caught {}: {}\n", e.category(), e)?,
    }

    writeln!(out, "Testing multiple errors together...")?;
    let outcome = parse_number()
        .and_then(|_| divide())
        .and_then(|_| lookup_missing());
    if outcome.is_err() {
        writeln!(out, "Caught an error, but program continues!\n")?;
    }

    writeln!(out, "All error types tested successfully!")?;
    Ok(())
}

pub fn run_custom<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Custom Garden Errors Demo ===\n")?;

    let wilting = || GardenError::Plant("The tomato plant is wilting!".to_string());
    let dry = || GardenError::Water("Not enough water in the tank!".to_string());

    writeln!(out, "Testing PlantError...")?;
    let err = wilting();
    writeln!(out, "Caught {}: {}\n", err.category(), err)?;

    writeln!(out, "Testing WaterError...")?;
    let err = dry();
    writeln!(out, "Caught {}: {}\n", err.category(), err)?;

    writeln!(out, "Testing catching all garden errors...")?;
    for raised in [wilting(), dry()] {
        let err: NexusError = raised.into();
        if let NexusError::Garden(garden) = &err {
            writeln!(out, "Caught a garden error: {}", garden)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "All custom error types work correctly!")?;
    Ok(())
}

pub fn run_watering<W: Write>(out: &mut W, config: &NexusConfig) -> NexusResult<()> {
    writeln!(out, "=== Garden Watering System ===\n")?;

    writeln!(out, "Testing normal watering...")?;
    water_plants(out, &["Tomato", "Lettuce", "Carrot"], &config.waterable_plants)?;
    writeln!(out)?;

    writeln!(out, "Testing with error...")?;
    water_plants(out, &["Tomato", "None", "Cactus"], &config.waterable_plants)?;
    writeln!(out)?;

    writeln!(out, "Cleanup always happens, even with errors.")?;
    Ok(())
}

pub fn run_health<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Plant Health Checker ===\n")?;

    let checks = [
        ("good values", "tomato", 5, 6),
        ("empty plant name", "", 5, 6),
        ("bad water level", "cucumber", 15, 6),
        ("bad sunlight hours", "lettuce", 5, 0),
    ];
    for (label, name, water, sunlight) in checks {
        writeln!(out, "Testing {}...", label)?;
        match check_plant_health(name, water, sunlight) {
            Ok(()) => writeln!(out, "Plant '{}' is healthy!\n", name)?,
            Err(NexusError::Garden(e)) => writeln!(out, "Error: {}\n", e)?,
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "All error raising tests completed!")?;
    Ok(())
}

pub fn run_management<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Garden Management System ===\n")?;
    let mut garden = GardenManagement::default();

    writeln!(out, "Adding plants to garden...")?;
    for plant in [
        TrackedPlant::new("tomato", 5, 8),
        TrackedPlant::new("Lettuce", 15, 6),
        TrackedPlant::new("", 10, 5),
    ] {
        let name = plant.name.clone();
        match garden.add_plant(plant) {
            Ok(()) => writeln!(out, "Added {} successfully", name)?,
            Err(NexusError::Garden(e)) => writeln!(out, "{}", e)?,
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "\nWatering plants...")?;
    if garden.water_plants(out)?.is_none() {
        writeln!(out, "No plants to water.")?;
    }
    writeln!(out)?;

    writeln!(out, "Checking plant health...")?;
    for name in ["tomato", "Lettuce"] {
        match garden.check_plant_health(name) {
            Ok(line) => writeln!(out, "{}", line)?,
            Err(e @ NexusError::Garden(_)) | Err(e @ NexusError::MissingKey(_)) => {
                writeln!(out, "{}", e)?;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "\nTesting error recovery...")?;
    let failure: NexusError = GardenError::Water("Not enough water in tank".to_string()).into();
    if let NexusError::Garden(e) = failure {
        writeln!(out, "Caught GardenError: {}", e)?;
        writeln!(out, "System recovered and continuing...\n")?;
    }

    writeln!(out, "Garden management system test complete!")?;
    Ok(())
}
