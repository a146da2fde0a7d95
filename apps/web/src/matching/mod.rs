// Career matching: the CareerMatcher trait, the overlap and classifier
// backends, the display-side confidence rescaler, and the results page.

pub mod classifier;
pub mod confidence;
pub mod handlers;
pub mod matcher;
pub mod overlap;
