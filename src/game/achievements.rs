//! Set analytics over players' achievements
//!
//! Sets are `BTreeSet`s so iteration order, and therefore printed output,
//! is deterministic.

use std::collections::{BTreeMap, BTreeSet};

pub type Achievements = BTreeSet<String>;

/// Build a set from string literals
pub fn achievement_set<I, S>(items: I) -> Achievements
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Achievements held by every player; empty when there are no players
pub fn common(players: &[&Achievements]) -> Achievements {
    let Some((first, rest)) = players.split_first() else {
        return Achievements::new();
    };
    first
        .iter()
        .filter(|a| rest.iter().all(|set| set.contains(*a)))
        .cloned()
        .collect()
}

/// Achievements held by at least one player
pub fn all(players: &[&Achievements]) -> Achievements {
    players.iter().flat_map(|set| set.iter().cloned()).collect()
}

/// Achievements held by exactly one player
pub fn rare(players: &[&Achievements]) -> Achievements {
    let mut holders: BTreeMap<&str, usize> = BTreeMap::new();
    for set in players {
        for achievement in set.iter() {
            *holders.entry(achievement.as_str()).or_default() += 1;
        }
    }
    holders
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|(achievement, _)| achievement.to_string())
        .collect()
}

/// What `player` has that `other` lacks
pub fn only_in(player: &Achievements, other: &Achievements) -> Achievements {
    player.difference(other).cloned().collect()
}
