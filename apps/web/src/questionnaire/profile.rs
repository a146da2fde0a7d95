use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One user's validated questionnaire answers.
///
/// Every string is one of the options in [`super::options`]; interests and
/// strengths hold 1..=3 distinct entries in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub education: String,
    pub field: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub learning_style: String,
    pub learning_rate: String,
    pub time_horizon: String,
    pub risk: String,
}

impl UserProfile {
    pub fn interest_set(&self) -> HashSet<&str> {
        self.interests.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_profile() -> UserProfile {
        UserProfile {
            education: "Undergraduate".to_string(),
            field: "Engineering".to_string(),
            interests: vec![
                "Problem solving / logical thinking".to_string(),
                "Working with numbers or data".to_string(),
            ],
            strengths: vec!["Logical thinking".to_string()],
            learning_style: "Balanced".to_string(),
            learning_rate: "Fast learner".to_string(),
            time_horizon: "1–3 years".to_string(),
            risk: "Moderate risk".to_string(),
        }
    }

    #[test]
    fn test_interest_set() {
        let profile = sample_profile();
        let set = profile.interest_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("Working with numbers or data"));
    }
}
