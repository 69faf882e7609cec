use serde::Serialize;

const TIER_WIDTH: i64 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RatingTier {
    Newbie,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl RatingTier {
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            r if r >= 2000 => RatingTier::Expert,
            r if r >= 1500 => RatingTier::Advanced,
            r if r >= 1000 => RatingTier::Intermediate,
            r if r >= 500 => RatingTier::Beginner,
            _ => RatingTier::Newbie,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RatingTier::Newbie => "Newbie",
            RatingTier::Beginner => "Beginner",
            RatingTier::Intermediate => "Intermediate",
            RatingTier::Advanced => "Advanced",
            RatingTier::Expert => "Expert",
        }
    }

    pub fn next(&self) -> Option<RatingTier> {
        match self {
            RatingTier::Newbie => Some(RatingTier::Beginner),
            RatingTier::Beginner => Some(RatingTier::Intermediate),
            RatingTier::Intermediate => Some(RatingTier::Advanced),
            RatingTier::Advanced => Some(RatingTier::Expert),
            RatingTier::Expert => None,
        }
    }

    /// Lowest rating inside the tier.
    pub fn floor(&self) -> i64 {
        match self {
            RatingTier::Newbie => 0,
            RatingTier::Beginner => 500,
            RatingTier::Intermediate => 1000,
            RatingTier::Advanced => 1500,
            RatingTier::Expert => 2000,
        }
    }

    /// Percentage of the way from this tier's floor to the next tier.
    pub fn progress(&self, rating: i64) -> f64 {
        if self.next().is_none() {
            return 100.0;
        }
        let into_tier = (rating - self.floor()).clamp(0, TIER_WIDTH);
        into_tier as f64 / TIER_WIDTH as f64 * 100.0
    }
}
