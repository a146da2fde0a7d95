//! Matcher trait and the result types shared by every backend.
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>`, chosen at startup via config.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::catalog::{CareerCatalog, CareerRecord};
use crate::config::{Config, MatcherBackend};
use crate::errors::AppError;
use crate::matching::classifier::{load_model_bundle, ClassifierMatcher};
use crate::matching::overlap::OverlapMatcher;
use crate::questionnaire::profile::UserProfile;

/// How many careers the results page shows.
pub const TOP_N: usize = 3;

pub const MODEL_FALLBACK_NOTICE: &str =
    "The career model could not be loaded, so these matches are based on shared interests only.";

/// One ranked career.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub career: CareerRecord,
    /// Fit score shown to the user, 0 – 100.
    pub score: f64,
    /// Backend-specific raw value: shared-activity count or model probability.
    pub raw_score: f64,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub matches: Vec<MatchResult>,
    pub backend: String, // "overlap" | "classifier"
    pub notice: Option<String>,
}

/// The matcher trait. Implement this to swap ranking backends without
/// touching the results handler.
#[async_trait]
pub trait CareerMatcher: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn rank(
        &self,
        profile: &UserProfile,
        catalog: &CareerCatalog,
    ) -> Result<MatchReport, AppError>;
}

/// Stands in for the classifier when its bundle failed to load, so the
/// failure surfaces per request instead of crashing on first prediction.
pub struct UnavailableMatcher {
    pub reason: String,
}

#[async_trait]
impl CareerMatcher for UnavailableMatcher {
    fn backend(&self) -> &'static str {
        "classifier"
    }

    async fn rank(
        &self,
        _profile: &UserProfile,
        _catalog: &CareerCatalog,
    ) -> Result<MatchReport, AppError> {
        Err(AppError::ModelUnavailable(self.reason.clone()))
    }
}

/// Builds the configured matcher. A classifier bundle that fails to load is
/// logged and replaced by [`UnavailableMatcher`].
pub fn build_matcher(config: &Config) -> Arc<dyn CareerMatcher> {
    match config.matcher {
        MatcherBackend::Overlap => {
            info!("Career matcher: overlap");
            Arc::new(OverlapMatcher)
        }
        MatcherBackend::Classifier => classifier_or_unavailable(&config.model_path, config),
    }
}

fn classifier_or_unavailable(path: &Path, config: &Config) -> Arc<dyn CareerMatcher> {
    match load_model_bundle(path) {
        Ok(bundle) => {
            info!(
                classes = bundle.classes.len(),
                features = bundle.feature_names.len(),
                confidence_boost = config.confidence_boost,
                "Career matcher: classifier"
            );
            Arc::new(ClassifierMatcher::new(bundle, config.confidence_boost))
        }
        Err(e) => {
            error!("Failed to load career model from {}: {e:#}", path.display());
            Arc::new(UnavailableMatcher {
                reason: format!("{e:#}"),
            })
        }
    }
}
