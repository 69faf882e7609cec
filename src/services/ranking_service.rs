use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::{LeaderboardEntry, StandingResponse},
    repositories::UserProfileRepository,
};

pub struct RankingService {
    repository: Arc<dyn UserProfileRepository>,
}

impl RankingService {
    pub fn new(repository: Arc<dyn UserProfileRepository>) -> Self {
        Self { repository }
    }

    /// 1-based rank of `rating`: one more than the number of profiles rated
    /// strictly higher, so equal ratings share a rank.
    pub async fn rank(&self, rating: i64) -> AppResult<u64> {
        let above = self.repository.count_rated_above(rating).await?;
        Ok(above + 1)
    }

    /// Highest rated profiles, ranked with the same rule as [`Self::rank`].
    pub async fn leaderboard(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        let profiles = self.repository.top_by_rating(limit).await?;

        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            // Sorted by rating descending, so every higher rated profile is
            // already listed above this one.
            let rank = match entries.last() {
                Some(previous) if previous.rating == profile.rating => previous.rank,
                _ => position as u64 + 1,
            };
            entries.push(LeaderboardEntry::new(rank, profile));
        }

        Ok(entries)
    }

    pub async fn standing(&self, user_id: &str) -> AppResult<StandingResponse> {
        let profile = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::profile_not_found(user_id))?;

        let rank = self.rank(profile.rating).await?;
        Ok(StandingResponse::new(profile, rank))
    }
}
