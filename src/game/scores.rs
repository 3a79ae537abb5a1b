use crate::error::{NexusError, NexusResult};

/// Command line scores split into accepted integers and rejected tokens
///
/// Scores are held as `i128` so that totals and ranges over any command line
/// that fits in memory stay exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScores {
    pub scores: Vec<i128>,
    pub rejected: Vec<String>,
}

/// Parse every token as an integer score, keeping the ones that fail aside
pub fn parse_scores<S: AsRef<str>>(args: &[S]) -> ParsedScores {
    let mut parsed = ParsedScores::default();
    for arg in args {
        let arg = arg.as_ref();
        match arg.trim().parse::<i128>() {
            Ok(score) => parsed.scores.push(score),
            Err(_) => parsed.rejected.push(arg.to_string()),
        }
    }
    parsed
}

/// Aggregate statistics over a non-empty set of scores
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub total: i128,
    pub average: f64,
    pub high: i128,
    pub low: i128,
    pub range: i128,
    pub sorted: Vec<i128>,
}

impl ScoreSummary {
    /// `None` when there are no scores
    ///
    /// Fails with `InvalidValue` when the total or range leaves `i128`.
    pub fn from_scores(scores: &[i128]) -> NexusResult<Option<Self>> {
        let (Some(&high), Some(&low)) = (scores.iter().max(), scores.iter().min()) else {
            return Ok(None);
        };
        let total = scores
            .iter()
            .try_fold(0i128, |acc, &score| acc.checked_add(score))
            .ok_or_else(|| NexusError::InvalidValue("score total out of range".to_string()))?;
        let range = high
            .checked_sub(low)
            .ok_or_else(|| NexusError::InvalidValue("score range out of range".to_string()))?;
        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        Ok(Some(Self {
            count: scores.len(),
            total,
            average: total as f64 / scores.len() as f64,
            high,
            low,
            range,
            sorted,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scores_keeps_integers() {
        let parsed = parse_scores(&["1500", "abc", "2300", "-7", "3.5"]);
        assert_eq!(parsed.scores, vec![1500, 2300, -7]);
        assert_eq!(parsed.rejected, vec!["abc", "3.5"]);
    }

    #[test]
    fn test_summary() {
        let summary = ScoreSummary::from_scores(&[1500, 2300, 1800, 2100, 1950])
            .unwrap()
            .unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.total, 9650);
        assert_eq!(format!("{:.1}", summary.average), "1930.0");
        assert_eq!(summary.high, 2300);
        assert_eq!(summary.low, 1500);
        assert_eq!(summary.range, 800);
        assert_eq!(summary.sorted, vec![1500, 1800, 1950, 2100, 2300]);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert!(ScoreSummary::from_scores(&[]).unwrap().is_none());
    }

    #[test]
    fn test_summary_beyond_i64() {
        let max = i64::MAX as i128;
        let summary = ScoreSummary::from_scores(&[max, 1]).unwrap().unwrap();
        assert_eq!(summary.total, max + 1);
        assert_eq!(summary.total.to_string(), "9223372036854775808");

        let summary = ScoreSummary::from_scores(&[max, -1]).unwrap().unwrap();
        assert_eq!(summary.range, max + 1);
    }

    #[test]
    fn test_parse_scores_accepts_wide_integers() {
        let parsed = parse_scores(&["99999999999999999999", "-99999999999999999999"]);
        assert_eq!(
            parsed.scores,
            vec![99_999_999_999_999_999_999, -99_999_999_999_999_999_999]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_summary_total_overflow_is_invalid_value() {
        let result = ScoreSummary::from_scores(&[i128::MAX, 1]);
        assert!(matches!(result, Err(NexusError::InvalidValue(_))));

        let result = ScoreSummary::from_scores(&[i128::MAX, i128::MIN]);
        assert!(matches!(result, Err(NexusError::InvalidValue(_))));
    }
}
