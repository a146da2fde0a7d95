//! Roadmaps: static phase/milestone content for a selected career.
//!
//! Lookup prefers a career-specific roadmap and falls back to the career's
//! domain. `check_integrity` cross-references both tables with the catalog.

pub mod handlers;
pub mod tables;

use std::fmt;

use serde::Serialize;

use crate::catalog::{CareerCatalog, CareerRecord};

pub use tables::{RoadmapEntry, RoadmapPhase, CAREER_ROADMAPS, DOMAIN_ROADMAPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapSource {
    Career,
    Domain,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedRoadmap {
    pub source: RoadmapSource,
    pub key: &'static str,
    pub phases: &'static [RoadmapPhase],
}

impl ResolvedRoadmap {
    pub fn subtitle(&self) -> &'static str {
        match self.source {
            RoadmapSource::Career => "Career-Specific Roadmap",
            RoadmapSource::Domain => "Domain-Based Career Roadmap",
        }
    }
}

fn lookup(table: &'static [RoadmapEntry], key: &str) -> Option<&'static RoadmapEntry> {
    table.iter().find(|entry| entry.key == key)
}

/// Career roadmap by name or display name, else the domain roadmap.
pub fn resolve_roadmap(career: &CareerRecord) -> Option<ResolvedRoadmap> {
    let career_entry = lookup(CAREER_ROADMAPS, &career.career_name)
        .or_else(|| lookup(CAREER_ROADMAPS, career.display_name()));

    if let Some(entry) = career_entry {
        return Some(ResolvedRoadmap {
            source: RoadmapSource::Career,
            key: entry.key,
            phases: entry.phases,
        });
    }

    lookup(DOMAIN_ROADMAPS, &career.domain).map(|entry| ResolvedRoadmap {
        source: RoadmapSource::Domain,
        key: entry.key,
        phases: entry.phases,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// A career-keyed roadmap names no catalog career.
    UnknownCareer { key: &'static str },
    /// A domain-keyed roadmap names no catalog domain.
    UnknownDomain { key: &'static str },
    /// A catalog career has neither a career nor a domain roadmap.
    NoRoadmap { career: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::UnknownCareer { key } => {
                write!(f, "career roadmap '{key}' names no career in the dataset")
            }
            IntegrityIssue::UnknownDomain { key } => {
                write!(f, "domain roadmap '{key}' names no domain in the dataset")
            }
            IntegrityIssue::NoRoadmap { career } => {
                write!(f, "career '{career}' has no career or domain roadmap")
            }
        }
    }
}

/// Cross-references the roadmap tables with the catalog.
pub fn check_integrity(catalog: &CareerCatalog) -> Vec<IntegrityIssue> {
    check_tables(catalog, CAREER_ROADMAPS, DOMAIN_ROADMAPS)
}

fn check_tables(
    catalog: &CareerCatalog,
    careers: &'static [RoadmapEntry],
    domains: &'static [RoadmapEntry],
) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for entry in careers {
        if catalog.find(entry.key).is_none() {
            issues.push(IntegrityIssue::UnknownCareer { key: entry.key });
        }
    }

    let catalog_domains = catalog.domains();
    for entry in domains {
        if !catalog_domains.contains(entry.key) {
            issues.push(IntegrityIssue::UnknownDomain { key: entry.key });
        }
    }

    for career in catalog.careers() {
        let covered = careers
            .iter()
            .any(|e| e.key == career.career_name || e.key == career.display_name())
            || domains.iter().any(|e| e.key == career.domain);
        if !covered {
            issues.push(IntegrityIssue::NoRoadmap {
                career: career.career_name.clone(),
            });
        }
    }

    issues
}
