use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use spatnav_audit::AuditReport;
use spatnav_dom::Document;
use spatnav_engine::{NavConfig, NavOutcome, NavState, SearchOptions, SearchOrigin, SpatialNavigator};
use spatnav_types::Direction;

/// A loaded fixture and the navigator driving it.
pub struct Session {
    pub doc: Document,
    pub navigator: SpatialNavigator,
}

impl Session {
    pub fn open(fixture: &Path, config: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => NavConfig::load(path)?,
            None => NavConfig::default(),
        };
        let doc = Document::load(fixture)
            .with_context(|| format!("loading fixture {}", fixture.display()))?;
        log::info!("loaded {} ({} nodes)", fixture.display(), doc.len());
        Ok(Self {
            doc,
            navigator: SpatialNavigator::new(config),
        })
    }

    pub fn audit(&self) -> Result<AuditReport> {
        let doc = &self.doc;
        let report = spatnav_audit::audit(doc, self.navigator.config(), |n| doc.describe(n))?;
        Ok(report)
    }

    /// One gesture per direction, each starting where the last one left
    /// focus.
    pub fn navigate(&mut self, dirs: &[Direction]) -> Vec<Step> {
        dirs.iter()
            .map(|&dir| {
                let nav = self.navigator.navigate(&mut self.doc, dir);
                let (outcome, target) = match nav.outcome {
                    NavOutcome::Focused(n) => ("focused", Some(self.doc.describe(n))),
                    NavOutcome::Scrolled(n) => ("scrolled", Some(self.doc.describe(n))),
                    NavOutcome::Failed => ("failed", None),
                };
                Step {
                    direction: dir,
                    from: self.doc.describe(nav.origin),
                    outcome,
                    target,
                    path: nav.path,
                }
            })
            .collect()
    }

    pub fn search(&self, id: &str, dir: Direction) -> Result<SearchResult> {
        let origin = self
            .doc
            .get_element_by_id(id)
            .with_context(|| format!("no element with id '{id}'"))?;
        let target = self.navigator.search(
            &self.doc,
            SearchOrigin::Element(origin),
            dir,
            &SearchOptions::default(),
        );
        Ok(SearchResult {
            origin: self.doc.describe(origin),
            direction: dir,
            target: target.map(|n| self.doc.describe(n)),
        })
    }
}

// -----------------------------------------------------------------------
// Output records
// -----------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub direction: Direction,
    pub from: String,
    pub outcome: &'static str,
    pub target: Option<String>,
    pub path: Vec<NavState>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {} -> {}", self.direction.as_str(), self.from, self.outcome)?;
        if let Some(target) = &self.target {
            write!(f, " {target}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub origin: String,
    pub direction: Direction,
    pub target: Option<String>,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.origin,
            self.direction,
            self.target.as_deref().unwrap_or("(none)")
        )
    }
}
