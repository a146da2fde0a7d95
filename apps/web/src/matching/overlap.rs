use async_trait::async_trait;

use crate::catalog::CareerCatalog;
use crate::errors::AppError;
use crate::matching::matcher::{CareerMatcher, MatchReport, MatchResult, TOP_N};
use crate::questionnaire::profile::UserProfile;

/// Ranks careers by how many of the user's interests appear in their core
/// activities. Deterministic, no model needed.
pub struct OverlapMatcher;

#[async_trait]
impl CareerMatcher for OverlapMatcher {
    fn backend(&self) -> &'static str {
        "overlap"
    }

    async fn rank(
        &self,
        profile: &UserProfile,
        catalog: &CareerCatalog,
    ) -> Result<MatchReport, AppError> {
        Ok(MatchReport {
            matches: rank_by_overlap(profile, catalog, TOP_N),
            backend: self.backend().to_string(),
            notice: None,
        })
    }
}

/// Top `limit` careers by shared-activity count, highest first.
///
/// The sort is stable, so equal counts keep dataset order.
/// Fit score = shared / number of user interests × 100.
pub fn rank_by_overlap(
    profile: &UserProfile,
    catalog: &CareerCatalog,
    limit: usize,
) -> Vec<MatchResult> {
    let interests = profile.interest_set();

    let mut scored: Vec<(usize, usize)> = catalog
        .careers()
        .iter()
        .enumerate()
        .map(|(idx, career)| {
            let shared = career
                .core_activities
                .iter()
                .filter(|a| interests.contains(a.as_str()))
                .count();
            (idx, shared)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .map(|(idx, shared)| {
            let career = catalog.careers()[idx].clone();
            MatchResult {
                score: fit_score(shared, interests.len()),
                raw_score: shared as f64,
                detail: match shared {
                    1 => "1 shared activity".to_string(),
                    n => format!("{n} shared activities"),
                },
                career,
            }
        })
        .collect()
}

fn fit_score(shared: usize, interest_count: usize) -> f64 {
    if interest_count == 0 {
        return 0.0;
    }
    (shared as f64 / interest_count as f64 * 100.0).round()
}
