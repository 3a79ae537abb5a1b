use std::fmt;

/// Stock advice for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restock {
    Needed,
    Consider,
    Sufficient,
}

impl Restock {
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            0..=1 => Restock::Needed,
            2..=3 => Restock::Consider,
            _ => Restock::Sufficient,
        }
    }
}

impl fmt::Display for Restock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Restock::Needed => "Restock needed",
            Restock::Consider => "Consider restocking",
            Restock::Sufficient => "Sufficient stock",
        })
    }
}

/// Item quantities, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<(String, u32)>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// potion 5, armor 3, shield 2, sword 1, helmet 1
    pub fn starter() -> Self {
        let mut inventory = Self::new();
        for (item, quantity) in [("potion", 5), ("armor", 3), ("shield", 2), ("sword", 1), ("helmet", 1)] {
            inventory.set(item, quantity);
        }
        inventory
    }

    /// Set the quantity of `item`, appending it if new
    pub fn set(&mut self, item: impl Into<String>, quantity: u32) {
        let item = item.into();
        match self.items.iter_mut().find(|(name, _)| *name == item) {
            Some(entry) => entry.1 = quantity,
            None => self.items.push((item, quantity)),
        }
    }

    pub fn get(&self, item: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, quantity)| *quantity)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.get(item).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    pub fn quantities(&self) -> Vec<u32> {
        self.iter().map(|(_, quantity)| quantity).collect()
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|(_, quantity)| quantity).sum()
    }

    pub fn total_item_types(&self) -> usize {
        self.items.len()
    }

    /// Largest quantity; the earliest item wins ties
    pub fn most_abundant(&self) -> Option<(&str, u32)> {
        self.iter()
            .fold(None, |best, (name, quantity)| match best {
                Some((_, top)) if top >= quantity => best,
                _ => Some((name, quantity)),
            })
    }

    /// Smallest quantity; the earliest item wins ties
    pub fn least_abundant(&self) -> Option<(&str, u32)> {
        self.iter().min_by_key(|(_, quantity)| *quantity)
    }

    /// Percentage of all units held as `item`
    pub fn share(&self, item: &str) -> Option<f64> {
        let total = self.total_items();
        let quantity = self.get(item)?;
        if total == 0 {
            return Some(0.0);
        }
        Some(f64::from(quantity) * 100.0 / f64::from(total))
    }

    /// Items with more than four units
    pub fn moderate(&self) -> Vec<(&str, u32)> {
        self.iter().filter(|(_, quantity)| *quantity > 4).collect()
    }

    /// Items with fewer than five units
    pub fn scarce(&self) -> Vec<(&str, u32)> {
        self.iter().filter(|(_, quantity)| *quantity < 5).collect()
    }

    pub fn restock_suggestions(&self) -> Vec<(&str, Restock)> {
        self.iter()
            .map(|(name, quantity)| (name, Restock::for_quantity(quantity)))
            .collect()
    }

    /// Items that need restocking now
    pub fn restock_list(&self) -> Vec<&str> {
        self.restock_suggestions()
            .into_iter()
            .filter(|(_, advice)| *advice == Restock::Needed)
            .map(|(name, _)| name)
            .collect()
    }
}
