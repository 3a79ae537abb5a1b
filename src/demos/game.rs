use super::repr::{dict, list, quoted, str_list, str_set};
use crate::config::NexusConfig;
use crate::error::{NexusError, NexusResult};
use crate::game::achievements::{self, achievement_set};
use crate::game::{
    high_level, parse_scores, sample_players, Dashboard, Fibonacci, GameEventStream, Inventory,
    Position, Primes, ScoreSummary, StreamAnalytics,
};
use std::io::Write;
use std::time::Instant;

const PROGRAM: &str = "nexus";

pub fn run_quest<W: Write, S: AsRef<str>>(out: &mut W, args: &[S]) -> NexusResult<()> {
    writeln!(out, "=== Command Quest ===")?;
    if args.is_empty() {
        writeln!(out, "No arguments provided!")?;
    }
    writeln!(out, "Program name: {}", PROGRAM)?;
    if !args.is_empty() {
        writeln!(out, "Arguments received: {}", args.len())?;
        for (index, arg) in args.iter().enumerate() {
            writeln!(out, "Argument {}: {}", index + 1, arg.as_ref())?;
        }
    }
    writeln!(out, "Total arguments: {}", args.len() + 1)?;
    Ok(())
}

pub fn run_scores<W: Write, S: AsRef<str>>(out: &mut W, args: &[S]) -> NexusResult<()> {
    writeln!(out, "=== Player Score Analytics ===")?;
    if args.is_empty() {
        writeln!(
            out,
            "No scores provided. Usage: {} scores <score1> <score2> ...",
            PROGRAM
        )?;
        return Ok(());
    }

    let parsed = parse_scores(args);
    for token in &parsed.rejected {
        writeln!(out, "Warning: Invalid score '{}'. Ignored.", token)?;
    }
    let summary = match ScoreSummary::from_scores(&parsed.scores) {
        Ok(Some(summary)) => summary,
        Ok(None) => {
            writeln!(out, "No valid scores to analyze.")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(());
        }
    };

    writeln!(out, "Scores processed: {}", list(&parsed.scores))?;
    writeln!(out, "Total players: {}", summary.count)?;
    writeln!(out, "Total score: {}", summary.total)?;
    writeln!(out, "Average score: {:.1}", summary.average)?;
    writeln!(out, "High score: {}", summary.high)?;
    writeln!(out, "Low score: {}", summary.low)?;
    writeln!(out, "Score range: {}", summary.range)?;
    writeln!(out, "Sorted scores: {}", list(&summary.sorted))?;
    Ok(())
}

pub fn run_coords<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Game Coordinate System ===\n")?;

    let origin = Position::default();
    let spawn = Position::new(10, 20, 5);
    writeln!(out, "Position created: {}", spawn)?;
    writeln!(
        out,
        "Distance between {} and {}: {:.2}\n",
        origin,
        spawn,
        spawn.distance_from_origin()
    )?;

    writeln!(out, "Parsing coordinates: 3,4,0")?;
    let parsed: Position = "3,4,0".parse()?;
    writeln!(out, "Parsed position: {}", parsed)?;
    writeln!(
        out,
        "Distance between {} and {}: {:.2}",
        origin,
        parsed,
        parsed.distance_from_origin()
    )?;
    writeln!(
        out,
        "Distance between {} and {}: {:.2}\n",
        spawn,
        parsed,
        spawn.distance_to(&parsed)
    )?;

    writeln!(out, "Parsing invalid coordinates: \"abc,def,ghi\"")?;
    match "abc,def,ghi".parse::<Position>() {
        Ok(position) => writeln!(out, "Parsed position: {}", position)?,
        Err(e @ NexusError::InvalidValue(_)) => {
            writeln!(out, "Error parsing coordinates: {}", e)?;
            writeln!(out, "Error details - Type: {}, Args: {:?}", e.category(), e)?;
        }
        Err(e) => return Err(e),
    }
    writeln!(out)?;

    writeln!(out, "Unpacking demonstration:")?;
    let (x, y, z) = parsed.as_tuple();
    writeln!(out, "Player at x={}, y={}, z={}", x, y, z)?;
    writeln!(out, "Coordinates: x={}, y={}, z={}", x, y, z)?;
    Ok(())
}

pub fn run_achievements<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Achievement Tracker System ===\n")?;

    let alice = achievement_set(["first kill", "level 10", "treasure hunter", "speed demon"]);
    let bob = achievement_set(["first kill", "level 10", "boss slayer", "collector"]);
    let charlie = achievement_set([
        "level 10",
        "treasure hunter",
        "boss slayer",
        "speed demon",
        "perfectionist",
    ]);

    writeln!(out, "Player alice achievements: {}", str_set(&alice))?;
    writeln!(out, "Player bob achievements: {}", str_set(&bob))?;
    writeln!(out, "Player charlie achievements: {}\n", str_set(&charlie))?;

    let everyone = [&alice, &bob, &charlie];
    let every_achievement = achievements::all(&everyone);
    writeln!(out, "=== Achievement Analytics ===")?;
    writeln!(out, "All unique achievements: {}", str_set(&every_achievement))?;
    writeln!(out, "Total unique achievements: {}\n", every_achievement.len())?;

    writeln!(out, "Common to all players: {}", str_set(&achievements::common(&everyone)))?;
    writeln!(out, "Rare achievements (1 player): {}\n", str_set(&achievements::rare(&everyone)))?;

    writeln!(out, "Alice vs Bob common: {}", str_set(&achievements::common(&[&alice, &bob])))?;
    writeln!(out, "Alice unique: {}", str_set(&achievements::only_in(&alice, &bob)))?;
    writeln!(out, "Bob unique: {}", str_set(&achievements::only_in(&bob, &alice)))?;
    Ok(())
}

pub fn run_inventory<W: Write>(out: &mut W) -> NexusResult<()> {
    let inventory = Inventory::starter();

    writeln!(out, "=== Inventory System Analysis ===")?;
    writeln!(out, "Total items in inventory: {}", inventory.total_items())?;
    writeln!(out, "Unique item types: {}\n", inventory.total_item_types())?;

    writeln!(out, "=== Current Inventory ===")?;
    for (item, quantity) in inventory.iter() {
        let unit = if quantity > 1 { "units" } else { "unit" };
        let share = inventory.share(item).unwrap_or(0.0);
        writeln!(out, "{}: {} {} ({:.1}%)", item, quantity, unit, share)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Inventory Statistics ===")?;
    if let Some((item, quantity)) = inventory.most_abundant() {
        writeln!(out, "Most abundant: {} ({} units)", item, quantity)?;
    }
    if let Some((item, quantity)) = inventory.least_abundant() {
        writeln!(out, "Least abundant: {} ({} unit)", item, quantity)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Item Categories ===")?;
    writeln!(out, "Moderate: {}", dict(inventory.moderate()))?;
    writeln!(out, "Scarce: {}\n", dict(inventory.scarce()))?;

    writeln!(out, "=== Management Suggestions ===")?;
    writeln!(out, "Restock needed: {}", str_list(inventory.restock_list()))?;
    for (item, advice) in inventory.restock_suggestions() {
        writeln!(out, "{}: {}", item, advice)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Dictionary Properties Demo ===")?;
    writeln!(out, "Dictionary keys: {}", str_list(inventory.names()))?;
    writeln!(out, "Dictionary values: {}", list(inventory.quantities()))?;
    writeln!(
        out,
        "Sample lookup - {} in inventory: {}",
        quoted("sword"),
        inventory.contains("sword")
    )?;
    Ok(())
}

fn joined<I: Iterator<Item = u64>>(numbers: I) -> String {
    numbers.map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn run_events<W: Write>(out: &mut W, config: &NexusConfig) -> NexusResult<()> {
    writeln!(out, "=== Game Data Stream Processor ===\n")?;
    writeln!(out, "Processing {} game events...\n", config.event_count)?;

    for event in GameEventStream::new(config.event_count, config.event_seed).take(3) {
        writeln!(out, "{}", event)?;
    }
    writeln!(out, "...\n")?;

    let started = Instant::now();
    let analytics = StreamAnalytics::collect(
        GameEventStream::new(config.event_count, config.event_seed),
        config.high_level_threshold,
    );
    let veterans = high_level(
        GameEventStream::new(config.event_count, config.event_seed),
        config.high_level_threshold,
    )
    .count();
    let elapsed = started.elapsed();

    writeln!(out, "=== Stream Analytics ===")?;
    writeln!(out, "Total events processed: {}", analytics.total)?;
    writeln!(
        out,
        "High-level players ({}+): {}",
        config.high_level_threshold, analytics.high_level
    )?;
    writeln!(out, "Treasure events: {}", analytics.treasure)?;
    writeln!(out, "Level-up events: {}\n", analytics.level_ups)?;
    log::debug!(
        target: "nexus::game",
        "high level filter yielded {} of {} events",
        veterans,
        analytics.total
    );

    writeln!(out, "Memory usage: Constant (streaming)")?;
    writeln!(out, "Processing time: {:.3} seconds\n", elapsed.as_secs_f64())?;

    writeln!(out, "=== Generator Demonstration ===")?;
    writeln!(out, "Fibonacci sequence (first 10): {}", joined(Fibonacci::new(10)))?;
    writeln!(out, "Prime numbers (first 5): {}", joined(Primes::new(5)))?;
    Ok(())
}

pub fn run_dashboard<W: Write>(out: &mut W) -> NexusResult<()> {
    writeln!(out, "=== Game Analytics Dashboard ===\n")?;
    let players = sample_players();
    let dashboard = Dashboard::new(&players);

    writeln!(out, "=== List Comprehension Examples ===")?;
    writeln!(out, "High scorers (>2000): {}", str_list(dashboard.high_scorers(2000)))?;
    writeln!(out, "Scores doubled: {}", list(dashboard.doubled_scores()))?;
    writeln!(out, "Active players: {}\n", str_list(dashboard.active_players()))?;

    writeln!(out, "=== Dict Comprehension Examples ===")?;
    writeln!(out, "Player scores: {}", dict(dashboard.player_scores()))?;
    writeln!(
        out,
        "Score categories: {}",
        dict(
            dashboard
                .score_categories()
                .into_iter()
                .map(|(name, category)| (name, quoted(category)))
        )
    )?;
    writeln!(out, "Achievement counts: {}\n", dict(dashboard.achievement_counts()))?;

    writeln!(out, "=== Set Comprehension Examples ===")?;
    writeln!(out, "Unique players: {}", str_set(dashboard.unique_players()))?;
    writeln!(out, "Unique achievements: {}", str_set(dashboard.rare_achievements()))?;
    writeln!(out, "Active regions: {}\n", str_set(dashboard.active_regions()))?;

    writeln!(out, "=== Combined Analysis ===")?;
    writeln!(out, "Total players: {}", dashboard.total_players())?;
    writeln!(out, "Unique achievements: {}", dashboard.all_achievements().len())?;
    writeln!(out, "Average score: {:.1}", dashboard.average_score())?;
    if let Some(top) = dashboard.top_performer() {
        writeln!(out, "Top performer: {}", top)?;
    }
    writeln!(out, "\n=== End of Dashboard ===")?;
    Ok(())
}
