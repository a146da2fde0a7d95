//! Classifier backend: a pre-trained multinomial linear model over one-hot
//! profile features.
//!
//! The bundle carries everything inference needs: the class labels (label
//! encoder), the feature vocabulary (binarizer columns + one-hot categoricals),
//! the weight matrix and the intercepts. It is loaded once at startup.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::CareerCatalog;
use crate::errors::AppError;
use crate::matching::confidence::{boost_confidence, temperature_softmax};
use crate::matching::matcher::{CareerMatcher, MatchReport, MatchResult, TOP_N};
use crate::questionnaire::options::keys;
use crate::questionnaire::profile::UserProfile;

pub const SUPPORTED_BUNDLE_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelBundle {
    pub version: u32,
    pub classes: Vec<String>,
    pub feature_names: Vec<String>,
    /// One row per class, one column per feature.
    pub weights: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    #[serde(skip)]
    feature_index: HashMap<String, usize>,
}

impl ModelBundle {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut bundle: ModelBundle =
            serde_json::from_str(raw).context("Model bundle is not valid JSON")?;
        bundle.validate()?;
        bundle.feature_index = bundle
            .feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Ok(bundle)
    }

    fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_BUNDLE_VERSION {
            bail!(
                "Unsupported model bundle version {} (expected {SUPPORTED_BUNDLE_VERSION})",
                self.version
            );
        }
        if self.classes.is_empty() {
            bail!("Model bundle has no classes");
        }
        if self.weights.len() != self.classes.len() {
            bail!(
                "Model bundle has {} weight rows for {} classes",
                self.weights.len(),
                self.classes.len()
            );
        }
        if self.intercepts.len() != self.classes.len() {
            bail!(
                "Model bundle has {} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            );
        }
        if let Some((row, w)) = self
            .weights
            .iter()
            .enumerate()
            .find(|(_, w)| w.len() != self.feature_names.len())
        {
            bail!(
                "Weight row {row} has {} columns, expected {}",
                w.len(),
                self.feature_names.len()
            );
        }
        Ok(())
    }

    /// One-hot encodes the profile. Features the model never saw are dropped.
    pub fn feature_vector(&self, profile: &UserProfile) -> Vec<f64> {
        let mut x = vec![0.0; self.feature_names.len()];
        for name in profile_features(profile) {
            if let Some(&idx) = self.feature_index.get(&name) {
                x[idx] = 1.0;
            }
        }
        x
    }

    fn decision_function(&self, x: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| row.iter().zip(x).map(|(w, xi)| w * xi).sum::<f64>() + b)
            .collect()
    }

    /// Class probabilities in `classes` order; sums to 1.
    pub fn predict_proba(&self, profile: &UserProfile) -> Vec<f64> {
        let x = self.feature_vector(profile);
        temperature_softmax(&self.decision_function(&x), 1.0)
    }

    /// Most probable class; the earliest class wins ties.
    pub fn predict(&self, profile: &UserProfile) -> &str {
        let probs = self.predict_proba(profile);
        let mut best = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = i;
            }
        }
        &self.classes[best]
    }
}

/// Feature names present for a profile, as `<question>:<answer>`.
pub fn profile_features(profile: &UserProfile) -> Vec<String> {
    let mut features = vec![
        format!("{}:{}", keys::EDUCATION, profile.education),
        format!("{}:{}", keys::FIELD, profile.field),
        format!("{}:{}", keys::LEARNING_STYLE, profile.learning_style),
        format!("{}:{}", keys::LEARNING_RATE, profile.learning_rate),
        format!("{}:{}", keys::TIME_HORIZON, profile.time_horizon),
        format!("{}:{}", keys::RISK, profile.risk),
    ];
    // binarizer columns use the singular prefix
    features.extend(profile.interests.iter().map(|i| format!("interest:{i}")));
    features.extend(profile.strengths.iter().map(|s| format!("strength:{s}")));
    features
}

pub fn load_model_bundle(path: &Path) -> Result<ModelBundle> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model bundle {}", path.display()))?;
    ModelBundle::from_json(&raw).with_context(|| format!("Invalid model bundle {}", path.display()))
}

pub struct ClassifierMatcher {
    bundle: ModelBundle,
    confidence_boost: bool,
}

impl ClassifierMatcher {
    pub fn new(bundle: ModelBundle, confidence_boost: bool) -> Self {
        ClassifierMatcher {
            bundle,
            confidence_boost,
        }
    }
}

#[async_trait]
impl CareerMatcher for ClassifierMatcher {
    fn backend(&self) -> &'static str {
        "classifier"
    }

    async fn rank(
        &self,
        profile: &UserProfile,
        catalog: &CareerCatalog,
    ) -> Result<MatchReport, AppError> {
        let probs = self.bundle.predict_proba(profile);
        debug!(predicted = %self.bundle.predict(profile), "Classifier prediction");
        let displayed: Vec<f64> = if self.confidence_boost {
            let boosted = boost_confidence(&probs);
            if !boosted.preserves_total() {
                debug!(
                    floor_applied = boosted.floor_applied,
                    clipped = boosted.clipped,
                    "Boosted confidences no longer sum to 100"
                );
            }
            boosted.percentages
        } else {
            probs.iter().map(|p| p * 100.0).collect()
        };

        let mut order: Vec<usize> = (0..probs.len()).collect();
        order.sort_by(|&a, &b| probs[b].partial_cmp(&probs[a]).unwrap_or(Ordering::Equal));

        let mut matches = Vec::with_capacity(TOP_N);
        for idx in order {
            if matches.len() == TOP_N {
                break;
            }
            let label = &self.bundle.classes[idx];
            let Some(career) = catalog.find(label) else {
                warn!(class = %label, "Model class has no catalog entry; skipping");
                continue;
            };
            matches.push(MatchResult {
                career: career.clone(),
                score: round_one_decimal(displayed[idx]),
                raw_score: probs[idx],
                detail: format!("Model probability {:.1}%", probs[idx] * 100.0),
            });
        }

        Ok(MatchReport {
            matches,
            backend: self.backend().to_string(),
            notice: None,
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{bundled_catalog, career};
    use crate::config::Config;
    use crate::questionnaire::profile::tests::sample_profile;

    const LOGIC: &str = "Problem solving / logical thinking";

    /// Two classes; "Analyst" wins on the logic interest, "Designer" otherwise.
    fn tiny_bundle() -> ModelBundle {
        let raw = serde_json::json!({
            "version": 1,
            "classes": ["Analyst", "Designer", "Ghost"],
            "feature_names": [format!("interest:{LOGIC}"), "field:Engineering"],
            "weights": [[2.0, 0.5], [0.0, 0.0], [-5.0, -5.0]],
            "intercepts": [0.0, 1.0, 0.0]
        });
        ModelBundle::from_json(&raw.to_string()).unwrap()
    }

    fn tiny_catalog() -> CareerCatalog {
        CareerCatalog::new(vec![
            career("Analyst", "Tech", &[LOGIC]),
            career("Designer", "Design", &[]),
        ])
    }

    #[test]
    fn test_feature_vector_sets_known_features_only() {
        let bundle = tiny_bundle();
        let x = bundle.feature_vector(&sample_profile());
        assert_eq!(x, vec![1.0, 1.0]);
    }

    #[test]
    fn test_predict_proba_is_softmax_of_scores() {
        let bundle = tiny_bundle();
        let probs = bundle.predict_proba(&sample_profile());
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        // scores: 2.5, 1.0, -10.0
        let expected = 2.5_f64.exp() / (2.5_f64.exp() + 1.0_f64.exp() + (-10.0_f64).exp());
        assert!((probs[0] - expected).abs() < 1e-12);
        assert_eq!(bundle.predict(&sample_profile()), "Analyst");
    }

    #[test]
    fn test_predict_without_matching_features() {
        let bundle = tiny_bundle();
        let profile = UserProfile {
            interests: vec!["Writing or storytelling".to_string()],
            field: "Science".to_string(),
            ..sample_profile()
        };
        assert_eq!(bundle.predict(&profile), "Designer");
    }

    #[tokio::test]
    async fn test_rank_skips_classes_missing_from_catalog() {
        let matcher = ClassifierMatcher::new(tiny_bundle(), false);
        let report = matcher.rank(&sample_profile(), &tiny_catalog()).await.unwrap();
        let names: Vec<_> = report
            .matches
            .iter()
            .map(|m| m.career.career_name.as_str())
            .collect();
        assert_eq!(names, vec!["Analyst", "Designer"]);
        assert!((report.matches[0].score - round_one_decimal(report.matches[0].raw_score * 100.0)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_rank_with_boost_inflates_display_only() {
        let plain = ClassifierMatcher::new(tiny_bundle(), false)
            .rank(&sample_profile(), &tiny_catalog())
            .await
            .unwrap();
        let boosted = ClassifierMatcher::new(tiny_bundle(), true)
            .rank(&sample_profile(), &tiny_catalog())
            .await
            .unwrap();
        assert_eq!(plain.matches[0].raw_score, boosted.matches[0].raw_score);
        assert!(boosted.matches[0].score >= plain.matches[0].score);
        assert!(boosted.matches[0].score <= 98.4);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let raw = serde_json::json!({
            "version": 1,
            "classes": ["A", "B"],
            "feature_names": ["f1"],
            "weights": [[1.0]],
            "intercepts": [0.0, 0.0]
        });
        let err = ModelBundle::from_json(&raw.to_string()).unwrap_err();
        assert!(err.to_string().contains("1 weight rows for 2 classes"));
    }

    #[test]
    fn test_ragged_weights_rejected() {
        let raw = serde_json::json!({
            "version": 1,
            "classes": ["A"],
            "feature_names": ["f1", "f2"],
            "weights": [[1.0]],
            "intercepts": [0.0]
        });
        assert!(ModelBundle::from_json(&raw.to_string()).is_err());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let raw = serde_json::json!({
            "version": 9,
            "classes": ["A"],
            "feature_names": [],
            "weights": [[]],
            "intercepts": [0.0]
        });
        let err = ModelBundle::from_json(&raw.to_string()).unwrap_err();
        assert!(err.to_string().contains("version 9"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"\x80not json").unwrap();
        assert!(load_model_bundle(file.path()).is_err());
    }

    #[test]
    fn test_bundled_model_covers_catalog() {
        let bundle = load_model_bundle(&Config::default().model_path).unwrap();
        let catalog = bundled_catalog();
        assert_eq!(bundle.classes.len(), catalog.len());
        assert!(bundle.classes.iter().all(|c| catalog.find(c).is_some()));
    }

    #[tokio::test]
    async fn test_bundled_model_ranks_analytical_profile() {
        let bundle = load_model_bundle(&Config::default().model_path).unwrap();
        let report = ClassifierMatcher::new(bundle, false)
            .rank(&sample_profile(), &bundled_catalog())
            .await
            .unwrap();
        assert_eq!(report.matches.len(), TOP_N);
        assert!(report
            .matches
            .iter()
            .any(|m| m.career.career_name == "Data Analyst"));
        assert!(report.matches[0].raw_score >= report.matches[1].raw_score);
    }
}
