//! Audit results.

use std::fmt;

use serde::Serialize;
use spatnav_types::Direction;

/// Elements that pressing `direction` repeatedly cycles through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopReport {
    pub direction: Direction,
    pub members: Vec<String>,
}

/// Findings of one audit, with elements named by the caller's labels.
///
/// Component findings list the members of each flagged component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    /// Focusable elements in the snapshot.
    pub focusable: usize,
    /// Strongly connected components of the navigation graph.
    pub components: usize,
    /// Where a "down" press from the page body lands.
    pub entry: Option<String>,
    pub traps: Vec<Vec<String>>,
    pub isolated: Vec<Vec<String>>,
    pub unreachable: Vec<String>,
    pub loops: Vec<LoopReport>,
    /// Multi-element components with two or more exits. Informational.
    pub branching: Vec<Vec<String>>,
    pub non_focusable_clickables: Vec<String>,
    pub out_of_flow: Vec<String>,
    pub frames: Vec<String>,
}

impl AuditReport {
    /// Whether anything a keyboard user would get stuck on was found.
    /// Branching, out-of-flow elements and frames are informational.
    pub fn has_errors(&self) -> bool {
        !self.traps.is_empty()
            || !self.isolated.is_empty()
            || !self.unreachable.is_empty()
            || !self.loops.is_empty()
            || !self.non_focusable_clickables.is_empty()
    }
}

fn group(f: &mut fmt::Formatter<'_>, title: &str, groups: &[Vec<String>]) -> fmt::Result {
    if groups.is_empty() {
        return Ok(());
    }
    writeln!(f, "{title}:")?;
    for members in groups {
        writeln!(f, "  {}", members.join(", "))?;
    }
    Ok(())
}

fn list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{title}: {}", items.join(", "))
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} focusable elements in {} components, entry {}",
            self.focusable,
            self.components,
            self.entry.as_deref().unwrap_or("(none)")
        )?;
        group(f, "traps", &self.traps)?;
        group(f, "isolated", &self.isolated)?;
        list(f, "unreachable", &self.unreachable)?;
        for l in &self.loops {
            writeln!(f, "loop ({}): {}", l.direction, l.members.join(", "))?;
        }
        group(f, "branching (suspect)", &self.branching)?;
        list(f, "clickable but not focusable", &self.non_focusable_clickables)?;
        list(f, "fixed or sticky", &self.out_of_flow)?;
        list(f, "frames", &self.frames)?;
        if !self.has_errors() {
            writeln!(f, "no navigation problems found")?;
        }
        Ok(())
    }
}
