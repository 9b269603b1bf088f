//! Shared test layouts for the engine.
//!
//! Every helper builds a [`Document`] from `spatnav-dom` so tests run
//! against a real hit-testing, scrolling host.

use spatnav_dom::{Document, ElementSpec, NodeId};
use spatnav_types::Overflow;

use crate::cache::RectCache;
use crate::config::NavConfig;
use crate::context::SearchContext;

/// Owns the configuration and cache a [`SearchContext`] borrows.
pub struct Fixture {
    pub config: NavConfig,
    pub cache: RectCache<NodeId>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    pub fn with_config(config: NavConfig) -> Self {
        Self {
            config,
            cache: RectCache::new(),
        }
    }

    pub fn ctx<'a>(&'a self, doc: &'a Document) -> SearchContext<'a, Document> {
        SearchContext::new(doc, &self.config, &self.cache)
    }
}

/// `n` tab-indexed 100x50 boxes in a horizontal row, 50px apart.
pub fn row(n: usize) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body_id();
    let boxes = (0..n)
        .map(|i| {
            doc.append(
                body,
                ElementSpec::div()
                    .id(format!("box{}", i + 1))
                    .tab_index(0)
                    .rect(20.0 + i as f64 * 150.0, 20.0, 100.0, 50.0),
            )
        })
        .collect();
    (doc, boxes)
}

/// A `rows` x `cols` grid of 80x40 buttons on a 100x60 pitch.
pub fn grid(rows: usize, cols: usize) -> (Document, Vec<Vec<NodeId>>) {
    let mut doc = Document::new(1000.0, 800.0);
    let body = doc.body_id();
    let cells = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    doc.append(
                        body,
                        ElementSpec::button()
                            .id(format!("r{r}c{c}"))
                            .rect(10.0 + c as f64 * 100.0, 10.0 + r as f64 * 60.0, 80.0, 40.0),
                    )
                })
                .collect()
        })
        .collect();
    (doc, cells)
}

/// A 200x100 scroll container at (0, 100) holding five 40px-tall links
/// every 50px, so only the first two are in view. A button sits above
/// the list.
pub struct ScrollList {
    pub doc: Document,
    pub above: NodeId,
    pub list: NodeId,
    pub items: Vec<NodeId>,
}

pub fn scroll_list() -> ScrollList {
    let mut doc = Document::new(800.0, 600.0);
    let body = doc.body_id();
    let above = doc.append(
        body,
        ElementSpec::button().id("above").rect(0.0, 20.0, 200.0, 40.0),
    );
    let list = doc.append(
        body,
        ElementSpec::div()
            .id("list")
            .rect(0.0, 100.0, 200.0, 100.0)
            .overflow(Overflow::Auto),
    );
    let items = (0..5)
        .map(|i| {
            doc.append(
                list,
                ElementSpec::link()
                    .id(format!("item{i}"))
                    .rect(0.0, 100.0 + i as f64 * 50.0, 200.0, 40.0),
            )
        })
        .collect();
    ScrollList {
        doc,
        above,
        list,
        items,
    }
}
