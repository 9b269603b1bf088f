//! Declarative layout fixtures.
//!
//! A fixture describes a laid-out page: viewport size, the element tree
//! under `<body>` with border boxes and computed styles, and optionally
//! framed documents. Fixtures are written in TOML or JSON:
//!
//! ```toml
//! viewport = [800.0, 600.0]
//! focus = "a"
//!
//! [[body]]
//! tag = "button"
//! id = "a"
//! rect = [10.0, 10.0, 100.0, 40.0]
//!
//! [[body]]
//! tag = "div"
//! id = "list"
//! rect = [0.0, 100.0, 200.0, 100.0]
//! style = { overflow-x = "auto", overflow-y = "auto" }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spatnav_types::{ComputedStyle, ElementKind, InputType, Result, SpatNavError};

use crate::document::{Document, ElementSpec, NodeId};

/// A whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LayoutFixture {
    /// Viewport `[width, height]`.
    pub viewport: [f64; 2],
    /// Explicit document scroll size `[width, height]`.
    pub scroll_size: Option<[f64; 2]>,
    /// Id of the initially focused element.
    pub focus: Option<String>,
    pub body: Vec<ElementFixture>,
}

/// One element and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ElementFixture {
    pub tag: String,
    pub id: Option<String>,
    /// Border box `[x, y, width, height]` in document coordinates.
    pub rect: [f64; 4],
    /// `<input type>`.
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub tab_index: Option<i32>,
    pub href: bool,
    pub disabled: bool,
    pub inert: bool,
    pub onclick: bool,
    pub style: ComputedStyle,
    /// Scrollable content `[width, height]`.
    pub content_size: Option<[f64; 2]>,
    /// Text field value length.
    pub value_len: Option<usize>,
    /// Text field caret `[start, end]`.
    pub caret: Option<[usize; 2]>,
    /// Initial scroll offsets `[left, top]`.
    pub scroll: Option<[f64; 2]>,
    pub children: Vec<ElementFixture>,
    /// Content document of an `<iframe>`.
    pub frame: Option<FrameFixture>,
}

/// The document embedded by an `<iframe>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FrameFixture {
    pub scroll_size: Option<[f64; 2]>,
    pub body: Vec<ElementFixture>,
}

impl LayoutFixture {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from disk; `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }
}

impl ElementFixture {
    fn kind(&self) -> ElementKind {
        match ElementKind::from_tag(&self.tag.to_ascii_lowercase()) {
            ElementKind::Input(_) => {
                ElementKind::Input(InputType::from_attr(self.input_type.as_deref().unwrap_or("")))
            },
            kind => kind,
        }
    }

    fn spec(&self) -> ElementSpec {
        let [x, y, w, h] = self.rect;
        let mut spec = ElementSpec::new(self.kind())
            .rect(x, y, w, h)
            .style(self.style);
        if let Some(id) = &self.id {
            spec = spec.id(id.clone());
        }
        if let Some(index) = self.tab_index {
            spec = spec.tab_index(index);
        }
        if self.href {
            spec = spec.href();
        }
        if self.disabled {
            spec = spec.disabled();
        }
        if self.inert {
            spec = spec.inert();
        }
        if self.onclick {
            spec = spec.click_handler();
        }
        if let Some([cw, ch]) = self.content_size {
            spec = spec.content_size(cw, ch);
        }
        if self.value_len.is_some() || self.caret.is_some() {
            let len = self.value_len.unwrap_or(0);
            let [start, end] = self.caret.unwrap_or([len, len]);
            spec = spec.text(len, start.min(len), end.min(len));
        }
        spec
    }
}

impl Document {
    /// Build a document from a fixture.
    ///
    /// Fails on duplicate ids, a `frame` table on a non-iframe element,
    /// or a `focus` id that names no element.
    pub fn from_fixture(fixture: &LayoutFixture) -> Result<Self> {
        let [width, height] = fixture.viewport;
        if width <= 0.0 || height <= 0.0 {
            return Err(SpatNavError::Fixture(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        let mut doc = Document::new(width, height);
        if let Some([sw, sh]) = fixture.scroll_size {
            doc.set_content_size(doc.root, sw, sh);
        }
        let mut seen = HashSet::new();
        let body = doc.body_id();
        for element in &fixture.body {
            doc.build(body, element, &mut seen)?;
        }
        if let Some(focus) = &fixture.focus {
            let node = doc.get_element_by_id(focus).ok_or_else(|| {
                SpatNavError::Fixture(format!("focus target '{focus}' does not exist"))
            })?;
            doc.focused = Some(node);
        }
        log::debug!("fixture loaded: {} nodes", doc.len());
        Ok(doc)
    }

    /// Read and build a fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_fixture(&LayoutFixture::load(path)?)
    }

    fn build(
        &mut self,
        parent: NodeId,
        element: &ElementFixture,
        seen: &mut HashSet<String>,
    ) -> Result<NodeId> {
        if let Some(id) = &element.id
            && !seen.insert(id.clone())
        {
            return Err(SpatNavError::Fixture(format!("duplicate id '{id}'")));
        }
        let node = self.append(parent, element.spec());
        for child in &element.children {
            self.build(node, child, seen)?;
        }
        if let Some(frame) = &element.frame {
            if self.nodes[node].kind != ElementKind::Iframe {
                return Err(SpatNavError::Fixture(format!(
                    "'{}' has a frame but is not an iframe",
                    self.describe(node)
                )));
            }
            let inner_body = self.attach_frame(node);
            if let Some(content) = self.nodes[node].frame_content
                && let Some([sw, sh]) = frame.scroll_size
            {
                self.set_content_size(content, sw, sh);
            }
            for child in &frame.body {
                self.build(inner_body, child, seen)?;
            }
        }
        if let Some([left, top]) = element.scroll {
            self.set_scroll(node, left, top);
        }
        Ok(node)
    }
}
