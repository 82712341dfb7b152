use crate::{Error, Result, TIER_COUNT};

/// A review accepted into a tier, with its 1-based sequence number inside that tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    pub tier: usize,
    pub sequence: usize,
}

/// Per-tier counters for ratings `1..=5`, each capped at `target`.
/// Counters only ever go up.
#[derive(Debug, Clone)]
pub struct RatingBuckets {
    counts: [usize; TIER_COUNT],
    target: usize,
}

impl RatingBuckets {
    pub fn new(target: usize) -> Self {
        Self {
            counts: [0; TIER_COUNT],
            target,
        }
    }

    /// Parses a rating marker's text as a float.
    pub fn parse_rating(raw: &str) -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| Error::RatingParse(raw.into()))
    }

    /// Counts a review with rating `value` if it maps to a tier that still has room.
    ///
    /// Ratings below 1.0 and ratings of a full tier are skipped (`Ok(None)`).
    /// The tier is the rating truncated to an integer, so `4.5` lands in tier 4.
    pub fn try_accept(&mut self, value: f64) -> Result<Option<Acceptance>> {
        if value.is_nan() || value < 1.0 {
            return Ok(None);
        }
        if !value.is_finite() || value >= (TIER_COUNT + 1) as f64 {
            return Err(Error::RatingOutOfRange(value));
        }

        let tier = value.trunc() as usize;
        let slot = &mut self.counts[tier - 1];
        if *slot >= self.target {
            return Ok(None);
        }
        *slot += 1;
        Ok(Some(Acceptance {
            tier,
            sequence: *slot,
        }))
    }

    /// True once every tier holds `target` reviews.
    pub fn is_satisfied(&self) -> bool {
        self.counts.iter().all(|&c| c >= self.target)
    }

    pub fn counts(&self) -> [usize; TIER_COUNT] {
        self.counts
    }
}
