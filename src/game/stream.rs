//! Lazy game event streams and number sequences
//!
//! Every sequence here is a plain `Iterator`: finite, and restartable by
//! constructing it again. The event stream is driven by a seeded RNG so a
//! given `(count, seed)` always yields the same events.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

pub const PLAYERS: [&str; 5] = ["alice", "bob", "charlie", "diana", "eve"];
pub const ACTIONS: [&str; 5] = [
    "killed monster",
    "found treasure",
    "leveled up",
    "completed quest",
    "died",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEvent {
    pub id: u32,
    pub player: &'static str,
    pub level: u8,
    pub action: &'static str,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event {}: Player {} (Level {}) {}",
            self.id, self.player, self.level, self.action
        )
    }
}

/// `count` random events numbered from 1
pub struct GameEventStream {
    rng: StdRng,
    next_id: u64,
    count: u32,
}

impl GameEventStream {
    pub fn new(count: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
            count,
        }
    }
}

impl Iterator for GameEventStream {
    type Item = GameEvent;

    fn next(&mut self) -> Option<GameEvent> {
        if self.next_id > u64::from(self.count) {
            return None;
        }
        let event = GameEvent {
            id: self.next_id as u32,
            player: PLAYERS[self.rng.gen_range(0..PLAYERS.len())],
            level: self.rng.gen_range(1..=20),
            action: ACTIONS[self.rng.gen_range(0..ACTIONS.len())],
        };
        self.next_id += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (u64::from(self.count) + 1).saturating_sub(self.next_id) as usize;
        (left, Some(left))
    }
}

/// Events whose level is at least `min_level`
pub struct HighLevel<I> {
    events: I,
    min_level: u8,
}

impl<I: Iterator<Item = GameEvent>> Iterator for HighLevel<I> {
    type Item = GameEvent;

    fn next(&mut self) -> Option<GameEvent> {
        let min_level = self.min_level;
        self.events.find(|event| event.level >= min_level)
    }
}

pub fn high_level<I: Iterator<Item = GameEvent>>(events: I, min_level: u8) -> HighLevel<I> {
    HighLevel { events, min_level }
}

/// The first `n` Fibonacci numbers, starting at 0
///
/// Ends early after the largest term that fits in `u64`.
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
    remaining: usize,
}

impl Fibonacci {
    pub fn new(n: usize) -> Self {
        Self {
            current: Some(0),
            next: Some(1),
            remaining: n,
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.current?;
        self.remaining -= 1;
        let sum = self.next.and_then(|next| value.checked_add(next));
        self.current = self.next;
        self.next = sum;
        Some(value)
    }
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// The first `n` primes
pub struct Primes {
    candidate: u64,
    remaining: usize,
}

impl Primes {
    pub fn new(n: usize) -> Self {
        Self {
            candidate: 2,
            remaining: n,
        }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        while !is_prime(self.candidate) {
            self.candidate += 1;
        }
        let prime = self.candidate;
        self.candidate += 1;
        self.remaining -= 1;
        Some(prime)
    }
}

/// Counters gathered in one pass over an event stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamAnalytics {
    pub total: usize,
    pub high_level: usize,
    pub treasure: usize,
    pub level_ups: usize,
}

impl StreamAnalytics {
    pub fn collect<I: IntoIterator<Item = GameEvent>>(events: I, high_level_threshold: u8) -> Self {
        events
            .into_iter()
            .fold(Self::default(), |mut stats, event| {
                stats.total += 1;
                if event.level >= high_level_threshold {
                    stats.high_level += 1;
                }
                match event.action {
                    "found treasure" => stats.treasure += 1,
                    "leveled up" => stats.level_ups += 1,
                    _ => {}
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_stream_is_finite_and_numbered() {
        let events: Vec<_> = GameEventStream::new(25, 7).collect();
        assert_eq!(events.len(), 25);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[24].id, 25);
        assert!(events.iter().all(|e| (1..=20).contains(&e.level)));
        assert!(events.iter().all(|e| PLAYERS.contains(&e.player)));
    }

    #[test]
    fn test_event_stream_restarts_with_same_seed() {
        let first: Vec<_> = GameEventStream::new(50, 42).collect();
        let second: Vec<_> = GameEventStream::new(50, 42).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_at_u32_max() {
        let stream = GameEventStream::new(u32::MAX, 1);
        assert_eq!(stream.size_hint(), (u32::MAX as usize, Some(u32::MAX as usize)));
    }

    #[test]
    fn test_size_hint() {
        let mut stream = GameEventStream::new(3, 1);
        assert_eq!(stream.size_hint(), (3, Some(3)));
        stream.next();
        assert_eq!(stream.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_high_level_filter() {
        let all: Vec<_> = GameEventStream::new(200, 3).collect();
        let high: Vec<_> = high_level(GameEventStream::new(200, 3), 10).collect();
        assert_eq!(high.len(), all.iter().filter(|e| e.level >= 10).count());
        assert!(high.iter().all(|e| e.level >= 10));
    }

    #[test]
    fn test_fibonacci() {
        let fib: Vec<u64> = Fibonacci::new(10).collect();
        assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(Fibonacci::new(0).count(), 0);
    }

    #[test]
    fn test_fibonacci_stops_before_overflow() {
        let fib: Vec<u64> = Fibonacci::new(200).collect();
        assert_eq!(fib.len(), 94);
        assert_eq!(fib[93], 12_200_160_415_121_876_738);
        assert!(fib.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(Fibonacci::new(94).count(), 94);
    }

    #[test]
    fn test_primes() {
        let primes: Vec<u64> = Primes::new(5).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11]);
        assert!(!is_prime(1));
        assert!(is_prime(97));
    }

    #[test]
    fn test_analytics_single_pass() {
        let events: Vec<_> = GameEventStream::new(300, 9).collect();
        let stats = StreamAnalytics::collect(events.clone(), 10);

        assert_eq!(stats.total, 300);
        assert_eq!(
            stats.treasure,
            events.iter().filter(|e| e.action == "found treasure").count()
        );
        assert_eq!(
            stats.level_ups,
            events.iter().filter(|e| e.action == "leveled up").count()
        );
    }
}
