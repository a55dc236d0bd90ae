//! Fixed-tier range classification for bucketed inventory filters.
//!
//! Mileage and price are filtered the same way: the client picks one of the
//! canonical sentinels (each tier ceiling, or anything else for the overflow
//! bucket) and the server maps it to a half-open interval `(lower, upper]`.

use serde::Serialize;

/// One tier of a classifier. Tiers are ordered by ascending ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub ceiling: i64,
    pub label: &'static str,
}

impl Tier {
    #[must_use]
    pub const fn new(ceiling: i64, label: &'static str) -> Self {
        Self { ceiling, label }
    }
}

/// Half-open interval `(lower, upper]`. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
    pub label: &'static str,
}

impl Bucket {
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.lower.is_none_or(|lower| value > lower)
            && self.upper.is_none_or(|upper| value <= upper)
    }

    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        self.upper.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RangeClassifier {
    tiers: &'static [Tier],
    overflow_label: &'static str,
}

const MILEAGE_TIERS: &[Tier] = &[
    Tier::new(50_000, "Under 50,000"),
    Tier::new(100_000, "50,000 - 100,000"),
    Tier::new(150_000, "100,000 - 150,000"),
    Tier::new(200_000, "150,000 - 200,000"),
];

const PRICE_TIERS: &[Tier] = &[
    Tier::new(20_000, "Under 20,000"),
    Tier::new(40_000, "20,000 - 40,000"),
    Tier::new(60_000, "40,000 - 60,000"),
    Tier::new(80_000, "60,000 - 80,000"),
];

impl RangeClassifier {
    pub const MILEAGE: Self = Self::new(MILEAGE_TIERS, "Over 200,000");

    pub const PRICE: Self = Self::new(PRICE_TIERS, "Over 80,000");

    /// `tiers` must be non-empty and sorted by ascending ceiling.
    #[must_use]
    pub const fn new(tiers: &'static [Tier], overflow_label: &'static str) -> Self {
        Self {
            tiers,
            overflow_label,
        }
    }

    #[must_use]
    pub const fn tiers(&self) -> &'static [Tier] {
        self.tiers
    }

    /// The bucket above the last tier ceiling.
    #[must_use]
    pub fn overflow(&self) -> Bucket {
        Bucket {
            lower: self.tiers.last().map(|t| t.ceiling),
            upper: None,
            label: self.overflow_label,
        }
    }

    /// Maps a sentinel onto its bucket. Only exact tier ceilings select a
    /// tier; every other value lands in the overflow bucket.
    #[must_use]
    pub fn for_sentinel(&self, sentinel: i64) -> Bucket {
        self.tiers
            .iter()
            .position(|tier| tier.ceiling == sentinel)
            .map_or_else(|| self.overflow(), |index| self.tier_bucket(index))
    }

    /// Like [`Self::for_sentinel`] but for raw path or query input.
    /// Input that is not an integer selects the overflow bucket.
    #[must_use]
    pub fn parse_sentinel(&self, raw: &str) -> Bucket {
        raw.trim()
            .parse::<i64>()
            .map_or_else(|_| self.overflow(), |sentinel| self.for_sentinel(sentinel))
    }

    /// The bucket a concrete value falls into.
    #[must_use]
    pub fn bucket_of(&self, value: i64) -> Bucket {
        self.buckets()
            .find(|bucket| bucket.contains(value))
            .unwrap_or_else(|| self.overflow())
    }

    /// Every bucket in ascending order, overflow last.
    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        (0..self.tiers.len())
            .map(|index| self.tier_bucket(index))
            .chain(std::iter::once(self.overflow()))
    }

    fn tier_bucket(&self, index: usize) -> Bucket {
        let tier = self.tiers[index];
        Bucket {
            lower: index.checked_sub(1).map(|prev| self.tiers[prev].ceiling),
            upper: Some(tier.ceiling),
            label: tier.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tier_is_unbounded_below() {
        let bucket = RangeClassifier::MILEAGE.for_sentinel(50_000);
        assert_eq!(bucket.lower, None);
        assert_eq!(bucket.upper, Some(50_000));
        assert!(bucket.contains(0));
        assert!(bucket.contains(50_000));
        assert!(!bucket.contains(50_001));
    }

    #[test]
    fn middle_tiers_are_half_open() {
        let bucket = RangeClassifier::MILEAGE.for_sentinel(150_000);
        assert_eq!(bucket.lower, Some(100_000));
        assert_eq!(bucket.upper, Some(150_000));
        assert!(!bucket.contains(100_000));
        assert!(bucket.contains(100_001));
        assert!(bucket.contains(150_000));
        assert!(!bucket.contains(150_001));
    }

    #[test]
    fn unknown_sentinels_collapse_to_overflow() {
        for sentinel in [200_001, 75_000, 0, -1, i64::MAX] {
            let bucket = RangeClassifier::MILEAGE.for_sentinel(sentinel);
            assert!(bucket.is_overflow(), "{sentinel} should overflow");
            assert_eq!(bucket.lower, Some(200_000));
        }

        let bucket = RangeClassifier::PRICE.parse_sentinel("cheap");
        assert_eq!(bucket, RangeClassifier::PRICE.overflow());
        assert!(bucket.contains(80_001));
        assert!(!bucket.contains(80_000));
    }

    #[test]
    fn sentinels_must_be_whole_integers() {
        let classifier = RangeClassifier::MILEAGE;
        for raw in ["50000.0", "50000abc", "5e4", "50,000"] {
            assert!(classifier.parse_sentinel(raw).is_overflow(), "{raw} should overflow");
        }

        let first = classifier.for_sentinel(50_000);
        assert_eq!(classifier.parse_sentinel("050000"), first);
        assert_eq!(classifier.parse_sentinel(" 50000 "), first);
    }

    #[test]
    fn price_uses_its_own_thresholds() {
        let bucket = RangeClassifier::PRICE.parse_sentinel("40000");
        assert_eq!(bucket.lower, Some(20_000));
        assert_eq!(bucket.upper, Some(40_000));
        assert_eq!(bucket.label, "20,000 - 40,000");
    }

    #[test]
    fn buckets_partition_the_number_line() {
        let classifier = RangeClassifier::MILEAGE;
        let buckets: Vec<Bucket> = classifier.buckets().collect();
        assert_eq!(buckets.len(), 5);

        for value in [0, 50_000, 50_001, 99_999, 100_000, 150_001, 200_000, 200_001, 900_000] {
            let matching = buckets.iter().filter(|b| b.contains(value)).count();
            assert_eq!(matching, 1, "{value} must fall in exactly one bucket");
            assert!(classifier.bucket_of(value).contains(value));
        }
    }

    #[test]
    fn sentinel_bucket_matches_value_bucket_at_ceilings() {
        for tier in RangeClassifier::PRICE.tiers() {
            assert_eq!(
                RangeClassifier::PRICE.for_sentinel(tier.ceiling),
                RangeClassifier::PRICE.bucket_of(tier.ceiling)
            );
        }
    }
}
