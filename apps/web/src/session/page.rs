use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::questionnaire::profile::UserProfile;

/// The page a session is currently on. Every move between pages goes through
/// one of the transition methods on [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Questionnaire,
    Results,
    Roadmap,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Questionnaire => "/questionnaire",
            Page::Results => "/results",
            Page::Roadmap => "/roadmap",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Questionnaire => "questionnaire",
            Page::Results => "results",
            Page::Roadmap => "roadmap",
        }
    }
}

/// Outcome of a sidebar navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The session is now on the requested page.
    Arrived(Page),
    /// The requested page needs state the session lacks; it was sent elsewhere.
    Redirected(Page),
    /// Stayed on the current page; the message explains why.
    Refused { page: Page, warning: &'static str },
}

impl Navigation {
    /// The page the session ended up on.
    pub fn page(self) -> Page {
        match self {
            Navigation::Arrived(page) | Navigation::Redirected(page) => page,
            Navigation::Refused { page, .. } => page,
        }
    }
}

pub const SELECT_CAREER_FIRST: &str = "Select a career first";

/// One browser's state. Lives only in memory.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub page: Page,
    pub profile: Option<UserProfile>,
    pub selected_career: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Session::with_id(Uuid::new_v4(), now)
    }

    pub fn with_id(id: Uuid, now: DateTime<Utc>) -> Self {
        Session {
            id,
            page: Page::Questionnaire,
            profile: None,
            selected_career: None,
            created_at: now,
            last_seen: now,
        }
    }

    /// Questionnaire → Results. A new profile fully replaces the old one and
    /// invalidates any career picked from the old results.
    pub fn submit_profile(&mut self, profile: UserProfile) -> Page {
        self.profile = Some(profile);
        self.selected_career = None;
        self.page = Page::Results;
        self.page
    }

    /// True while nothing has been answered, selected or navigated to.
    pub fn is_pristine(&self) -> bool {
        self.page == Page::Questionnaire
            && self.profile.is_none()
            && self.selected_career.is_none()
    }

    /// Results → Roadmap. Careers only come from results, so a session
    /// without a profile is sent to the questionnaire instead.
    pub fn select_career(&mut self, career_name: String) -> Navigation {
        if self.profile.is_none() {
            self.page = Page::Questionnaire;
            return Navigation::Redirected(self.page);
        }
        self.selected_career = Some(career_name);
        self.page = Page::Roadmap;
        Navigation::Arrived(self.page)
    }

    /// Roadmap → Results.
    pub fn back_to_results(&mut self) -> Page {
        self.page = if self.profile.is_some() {
            Page::Results
        } else {
            Page::Questionnaire
        };
        self.page
    }

    pub fn navigate(&mut self, target: Page) -> Navigation {
        match target {
            Page::Questionnaire => {
                self.page = Page::Questionnaire;
                Navigation::Arrived(self.page)
            }
            Page::Results if self.profile.is_some() => {
                self.page = Page::Results;
                Navigation::Arrived(self.page)
            }
            Page::Results => {
                self.page = Page::Questionnaire;
                Navigation::Redirected(self.page)
            }
            Page::Roadmap if self.selected_career.is_some() => {
                self.page = Page::Roadmap;
                Navigation::Arrived(self.page)
            }
            Page::Roadmap => Navigation::Refused {
                page: self.page,
                warning: SELECT_CAREER_FIRST,
            },
        }
    }
}
