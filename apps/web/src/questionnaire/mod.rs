// Questionnaire: answer options, the validated UserProfile, and the form page.

pub mod handlers;
pub mod options;
pub mod profile;
pub mod validation;
