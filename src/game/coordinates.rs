use crate::error::NexusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in game space
///
/// # Example
/// ```
/// use nexus_lib::game::Position;
///
/// let pos: Position = "3,4,0".parse().unwrap();
/// assert_eq!(format!("{:.2}", pos.distance_from_origin()), "5.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.distance_to(&Position::default())
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn as_tuple(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `"x,y,z"` with integer components
impl FromStr for Position {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(NexusError::InvalidValue(
                "Invalid coordinate string format".to_string(),
            ));
        }

        let component = |part: &str| {
            part.trim().parse::<i32>().map_err(|e| {
                NexusError::InvalidValue(format!("invalid coordinate '{}': {}", part, e))
            })
        };
        Ok(Self {
            x: component(parts[0])?,
            y: component(parts[1])?,
            z: component(parts[2])?,
        })
    }
}
