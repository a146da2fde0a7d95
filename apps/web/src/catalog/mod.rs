//! Career catalog: the read-only reference dataset of career archetypes.
//!
//! Loaded once at startup from CSV. Row order is significant: the overlap
//! scorer breaks ties by it.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One career archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub career_name: String,
    pub domain: String,
    pub core_activities: Vec<String>,
    pub entry_roles: Vec<String>,
    pub adjacent_careers: Vec<String>,
}

impl CareerRecord {
    /// Career name without dataset path numbering, e.g.
    /// `"Data Analyst Path 2"` → `"Data Analyst"`.
    pub fn display_name(&self) -> &str {
        match self.career_name.find(" Path") {
            Some(idx) => &self.career_name[..idx],
            None => &self.career_name,
        }
    }
}

/// Raw CSV row; list columns are comma separated.
#[derive(Debug, Deserialize)]
struct CareerCsvRow {
    career_name: String,
    domain: String,
    core_activities: String,
    entry_roles: String,
    adjacent_careers: String,
}

impl From<CareerCsvRow> for CareerRecord {
    fn from(row: CareerCsvRow) -> Self {
        CareerRecord {
            career_name: row.career_name.trim().to_string(),
            domain: row.domain.trim().to_string(),
            core_activities: split_list(&row.core_activities),
            entry_roles: split_list(&row.entry_roles),
            adjacent_careers: split_list(&row.adjacent_careers),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    careers: Vec<CareerRecord>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<CareerRecord>) -> Self {
        CareerCatalog { careers }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut careers = Vec::new();
        for (idx, row) in csv_reader.deserialize::<CareerCsvRow>().enumerate() {
            // +2: header line plus 1-based numbering
            let row = row.with_context(|| format!("Invalid career row at line {}", idx + 2))?;
            careers.push(CareerRecord::from(row));
        }

        Ok(CareerCatalog::new(careers))
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Looks a career up by exact name, then by display name.
    pub fn find(&self, name: &str) -> Option<&CareerRecord> {
        let name = name.trim();
        self.careers
            .iter()
            .find(|c| c.career_name == name)
            .or_else(|| self.careers.iter().find(|c| c.display_name() == name))
    }

    pub fn domains(&self) -> BTreeSet<&str> {
        self.careers.iter().map(|c| c.domain.as_str()).collect()
    }
}

/// Loads the career dataset. The dataset is required: a missing, malformed or
/// empty file is an error.
pub fn load_catalog(path: &Path) -> Result<CareerCatalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open career dataset {}", path.display()))?;
    let catalog = CareerCatalog::from_reader(file)
        .with_context(|| format!("Failed to parse career dataset {}", path.display()))?;

    if catalog.is_empty() {
        bail!("Career dataset {} contains no careers", path.display());
    }

    info!(
        careers = catalog.len(),
        domains = catalog.domains().len(),
        "Career catalog loaded from {}",
        path.display()
    );
    Ok(catalog)
}
