use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub achievements: Vec<String>,
    pub active: bool,
    pub region: String,
}

impl Player {
    pub fn new(name: &str, score: u32, achievements: &[&str], active: bool, region: &str) -> Self {
        Self {
            name: name.to_string(),
            score,
            achievements: achievements.iter().map(|a| a.to_string()).collect(),
            active,
            region: region.to_string(),
        }
    }
}

/// The four players shown on the dashboard
pub fn sample_players() -> Vec<Player> {
    vec![
        Player::new("alice", 2300, &["first_kill", "treasure_hunter"], true, "north"),
        Player::new("bob", 1800, &["level_10", "sharp_shooter"], true, "east"),
        Player::new("charlie", 2150, &["sharp_shooter", "treasure_hunter"], true, "central"),
        Player::new("diana", 2050, &["boss_slayer", "speed_runner", "novice"], false, "south"),
    ]
}

/// Scores at or above this are "high"
pub const HIGH_SCORE: u32 = 2200;

/// Read-only analytics over a slice of players
pub struct Dashboard<'a> {
    players: &'a [Player],
}

impl<'a> Dashboard<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self { players }
    }

    // Lists

    pub fn high_scorers(&self, threshold: u32) -> Vec<&'a str> {
        self.players
            .iter()
            .filter(|p| p.score > threshold)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn doubled_scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.score * 2).collect()
    }

    pub fn active_players(&self) -> Vec<&'a str> {
        self.players
            .iter()
            .filter(|p| p.active)
            .map(|p| p.name.as_str())
            .collect()
    }

    // Maps, in player order

    pub fn player_scores(&self) -> Vec<(&'a str, u32)> {
        self.players.iter().map(|p| (p.name.as_str(), p.score)).collect()
    }

    pub fn achievement_counts(&self) -> Vec<(&'a str, usize)> {
        self.players
            .iter()
            .map(|p| (p.name.as_str(), p.achievements.len()))
            .collect()
    }

    pub fn score_categories(&self) -> Vec<(&'a str, &'static str)> {
        self.players
            .iter()
            .map(|p| {
                let category = if p.score >= HIGH_SCORE { "high" } else { "low" };
                (p.name.as_str(), category)
            })
            .collect()
    }

    // Sets

    pub fn unique_players(&self) -> BTreeSet<&'a str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    /// Achievements held by exactly one player
    pub fn rare_achievements(&self) -> BTreeSet<&'a str> {
        let mut holders: BTreeMap<&str, usize> = BTreeMap::new();
        for player in self.players {
            let distinct: BTreeSet<&str> = player.achievements.iter().map(String::as_str).collect();
            for achievement in distinct {
                *holders.entry(achievement).or_default() += 1;
            }
        }
        holders
            .into_iter()
            .filter(|(_, count)| *count == 1)
            .map(|(achievement, _)| achievement)
            .collect()
    }

    pub fn active_regions(&self) -> BTreeSet<&'a str> {
        self.players
            .iter()
            .filter(|p| p.active)
            .map(|p| p.region.as_str())
            .collect()
    }

    // Combined

    pub fn total_players(&self) -> usize {
        self.players.len()
    }

    pub fn all_achievements(&self) -> BTreeSet<&'a str> {
        self.players
            .iter()
            .flat_map(|p| p.achievements.iter().map(String::as_str))
            .collect()
    }

    /// Zero when there are no players
    pub fn average_score(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let total: u64 = self.players.iter().map(|p| u64::from(p.score)).sum();
        total as f64 / self.players.len() as f64
    }

    /// Highest score; the earliest player wins ties
    pub fn top_performer(&self) -> Option<&'a str> {
        self.players
            .iter()
            .rev()
            .max_by_key(|p| p.score)
            .map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_analytics() {
        let players = sample_players();
        let dashboard = Dashboard::new(&players);

        assert_eq!(dashboard.high_scorers(2000), vec!["alice", "charlie", "diana"]);
        assert_eq!(dashboard.doubled_scores(), vec![4600, 3600, 4300, 4100]);
        assert_eq!(dashboard.active_players(), vec!["alice", "bob", "charlie"]);
    }

    #[test]
    fn test_map_analytics() {
        let players = sample_players();
        let dashboard = Dashboard::new(&players);

        assert_eq!(dashboard.player_scores()[0], ("alice", 2300));
        assert_eq!(dashboard.achievement_counts()[3], ("diana", 3));
        assert_eq!(
            dashboard.score_categories(),
            vec![("alice", "high"), ("bob", "low"), ("charlie", "low"), ("diana", "low")]
        );
    }

    #[test]
    fn test_set_analytics() {
        let players = sample_players();
        let dashboard = Dashboard::new(&players);

        assert_eq!(dashboard.unique_players().len(), 4);
        let rare: Vec<_> = dashboard.rare_achievements().into_iter().collect();
        assert_eq!(
            rare,
            vec!["boss_slayer", "first_kill", "level_10", "novice", "speed_runner"]
        );
        let regions: Vec<_> = dashboard.active_regions().into_iter().collect();
        assert_eq!(regions, vec!["central", "east", "north"]);
    }

    #[test]
    fn test_combined_analytics() {
        let players = sample_players();
        let dashboard = Dashboard::new(&players);

        assert_eq!(dashboard.total_players(), 4);
        assert_eq!(dashboard.all_achievements().len(), 7);
        assert_eq!(dashboard.average_score(), 2075.0);
        assert_eq!(dashboard.top_performer(), Some("alice"));
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::new(&[]);
        assert_eq!(dashboard.average_score(), 0.0);
        assert_eq!(dashboard.top_performer(), None);
        assert!(dashboard.rare_achievements().is_empty());
    }

    #[test]
    fn test_top_performer_ties_prefer_first() {
        let players = vec![
            Player::new("x", 10, &[], true, "n"),
            Player::new("y", 10, &[], true, "s"),
        ];
        assert_eq!(Dashboard::new(&players).top_performer(), Some("x"));
    }
}
