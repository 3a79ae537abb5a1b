use crate::app_log;
use crate::error::{GardenError, NexusError, NexusResult};
use crate::logger::LogLevel;
use std::io::Write;

/// Parse a temperature and check it is within 0..=40 °C
///
/// # Errors
/// - `InvalidValue` if `input` is not an integer
/// - `GardenError::Temperature` if it is out of range
pub fn check_temperature(input: &str) -> NexusResult<i32> {
    let temperature: i32 = input
        .trim()
        .parse()
        .map_err(|_| NexusError::InvalidValue(format!("'{}' is not a valid number", input)))?;

    if temperature < 0 {
        return Err(GardenError::Temperature(format!(
            "{}°C is too cold for plants (min 0°C)",
            temperature
        ))
        .into());
    }
    if temperature > 40 {
        return Err(GardenError::Temperature(format!(
            "{}°C is too hot for plants (max 40°C)",
            temperature
        ))
        .into());
    }
    Ok(temperature)
}

fn check_levels(water_level: i32, sunlight_hours: i32) -> Result<(), GardenError> {
    if water_level < 0 {
        return Err(GardenError::Water(format!(
            "Water level {} is too low (min 0)",
            water_level
        )));
    }
    if water_level > 10 {
        return Err(GardenError::Water(format!(
            "Water level {} is too high (max 10)",
            water_level
        )));
    }
    if sunlight_hours < 2 {
        return Err(GardenError::Sunlight(format!(
            "Sunlight hours {} is too low (min 2)",
            sunlight_hours
        )));
    }
    if sunlight_hours > 24 {
        return Err(GardenError::Sunlight(format!(
            "Sunlight hours {} is too high (max 24)",
            sunlight_hours
        )));
    }
    Ok(())
}

/// Validate a plant's name, water level (0..=10) and sunlight (2..=24 hours)
pub fn check_plant_health(name: &str, water_level: i32, sunlight_hours: i32) -> NexusResult<()> {
    if name.trim().is_empty() {
        return Err(GardenError::Plant("Plant name cannot be empty!".to_string()).into());
    }
    check_levels(water_level, sunlight_hours)?;
    Ok(())
}

/// What a watering run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WateringReport {
    pub watered: Vec<String>,
    /// The failure that stopped the run, if any
    pub error: Option<GardenError>,
    pub cleanup_ran: bool,
}

/// Open watering system; closing it is reported when the guard drops
pub struct WateringSystem<'a, W: Write> {
    out: &'a mut W,
    report: &'a mut WateringReport,
}

impl<'a, W: Write> WateringSystem<'a, W> {
    pub fn open(out: &'a mut W, report: &'a mut WateringReport) -> NexusResult<Self> {
        writeln!(out, "Opening watering system")?;
        Ok(Self { out, report })
    }

    /// Water one plant, refusing anything not in `catalog` (case-insensitive)
    pub fn water(&mut self, plant: &str, catalog: &[String]) -> NexusResult<()> {
        if !catalog.iter().any(|known| known.eq_ignore_ascii_case(plant)) {
            return Err(
                GardenError::Water(format!("Cannot water {} - invalid plant!", plant)).into(),
            );
        }
        writeln!(self.out, "Watering {}", plant)?;
        self.report.watered.push(plant.to_string());
        Ok(())
    }

    fn fail(&mut self, error: GardenError) -> NexusResult<()> {
        writeln!(self.out, "Error: {}", error)?;
        self.report.error = Some(error);
        Ok(())
    }
}

impl<W: Write> Drop for WateringSystem<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = writeln!(self.out, "Closing watering system (cleanup)") {
            app_log!(
                target: "garden::health",
                LogLevel::Error,
                "Failed to report watering cleanup: {}",
                e
            );
        }
        self.report.cleanup_ran = true;
    }
}

/// Water `plants` in order, stopping at the first invalid one
///
/// Watering failures are reported in the returned `WateringReport`; the
/// system is closed whether or not one occurs. Write failures on `out` are
/// returned as errors, after the system has been closed.
pub fn water_plants<W: Write>(
    out: &mut W,
    plants: &[&str],
    catalog: &[String],
) -> NexusResult<WateringReport> {
    let mut report = WateringReport::default();
    {
        let mut system = WateringSystem::open(out, &mut report)?;
        for plant in plants {
            match system.water(plant, catalog) {
                Ok(()) => {}
                Err(NexusError::Garden(error)) => {
                    system.fail(error)?;
                    break;
                }
                Err(other) => return Err(other),
            }
        }
    }
    Ok(report)
}

/// A plant tracked by `GardenManagement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedPlant {
    pub name: String,
    pub water_level: i32,
    pub sunlight_hours: i32,
}

impl TrackedPlant {
    pub fn new(name: impl Into<String>, water_level: i32, sunlight_hours: i32) -> Self {
        Self {
            name: name.into(),
            water_level,
            sunlight_hours,
        }
    }
}

/// Plants that can be added, watered and health-checked
pub struct GardenManagement {
    plants: Vec<TrackedPlant>,
    catalog: Vec<String>,
}

impl GardenManagement {
    pub fn new(catalog: Vec<String>) -> Self {
        Self {
            plants: Vec::new(),
            catalog,
        }
    }

    pub fn plants(&self) -> &[TrackedPlant] {
        &self.plants
    }

    /// # Errors
    /// `GardenError::Plant` for an empty name; the plant is not added.
    pub fn add_plant(&mut self, plant: TrackedPlant) -> NexusResult<()> {
        if plant.name.is_empty() {
            return Err(GardenError::Plant(
                "Error adding plant: Plant name cannot be empty!".to_string(),
            )
            .into());
        }
        self.plants.push(plant);
        Ok(())
    }

    /// Water every tracked plant; `None` when there is nothing to water
    pub fn water_plants<W: Write>(&self, out: &mut W) -> NexusResult<Option<WateringReport>> {
        if self.plants.is_empty() {
            return Ok(None);
        }
        let names: Vec<&str> = self.plants.iter().map(|p| p.name.as_str()).collect();
        water_plants(out, &names, &self.catalog).map(Some)
    }

    /// Describe the named plant's health
    ///
    /// # Errors
    /// - `MissingKey` if no plant has that name
    /// - `GardenError::Water` / `GardenError::Sunlight` for out of range levels
    pub fn check_plant_health(&self, name: &str) -> NexusResult<String> {
        let plant = self
            .plants
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| NexusError::MissingKey(format!("Plant '{}' not found in the garden.", name)))?;

        check_levels(plant.water_level, plant.sunlight_hours).map_err(|e| match e {
            GardenError::Water(msg) => GardenError::Water(format!("Error checking {}: {}", name, msg)),
            GardenError::Sunlight(msg) => {
                GardenError::Sunlight(format!("Error checking {}: {}", name, msg))
            }
            other => other,
        })?;

        Ok(format!(
            "{}: healthy (water: {}, sunlight: {})",
            plant.name, plant.water_level, plant.sunlight_hours
        ))
    }
}

impl Default for GardenManagement {
    fn default() -> Self {
        Self::new(
            ["tomato", "lettuce", "Daisy", "Sunflower", "Lily"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}
