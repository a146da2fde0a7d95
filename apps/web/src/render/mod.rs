//! Page templates. Handlers build a view struct and hand it to [`render`];
//! askama escapes every interpolated value.

use askama::Template;

use crate::session::Page;

/// Shared layout fields read by `base.html`.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: String,
    pub active: &'static str,
}

impl Chrome {
    pub fn new(title: &str, page: Page) -> Self {
        Chrome {
            title: title.to_string(),
            active: page.slug(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct QuestionView {
    pub key: &'static str,
    pub label: &'static str,
    /// One of `select`, `radio`, `checkbox`.
    pub input: &'static str,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub heading: &'static str,
    pub questions: Vec<QuestionView>,
}

#[derive(Template)]
#[template(path = "questionnaire.html")]
pub struct QuestionnairePage {
    pub chrome: Chrome,
    pub errors: Vec<String>,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone)]
pub struct CareerCard {
    pub career_name: String,
    pub display_name: String,
    pub domain: String,
    pub score_label: String,
    pub detail: Option<String>,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage {
    pub chrome: Chrome,
    pub notice: Option<String>,
    pub backend_label: String,
    pub cards: Vec<CareerCard>,
}

#[derive(Debug, Clone)]
pub struct PhaseView {
    pub name: &'static str,
    pub milestones: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "roadmap.html")]
pub struct RoadmapPage {
    pub chrome: Chrome,
    pub display_name: String,
    pub subtitle: &'static str,
    pub domain: String,
    pub phases: Vec<PhaseView>,
    pub entry_roles: Vec<String>,
    pub adjacent_careers: Vec<String>,
}

#[derive(Template)]
#[template(path = "notice.html")]
pub struct NoticePage {
    pub chrome: Chrome,
    pub heading: &'static str,
    pub message: &'static str,
    pub link_href: &'static str,
    pub link_label: &'static str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
}

pub fn render<T: Template>(page: &T) -> Result<String, askama::Error> {
    page.render()
}
