//! Element metadata the host reports for each node.
//!
//! These are resolved values: the host has already run its cascade and
//! layout, so every property has a single concrete representation.

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------
// ElementKind
// -----------------------------------------------------------------------

/// The element types spatial navigation treats specially.
///
/// Everything else is `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Html,
    Body,
    Iframe,
    Anchor,
    Button,
    Input(InputType),
    Textarea,
    Select,
    OptGroup,
    Option,
    Fieldset,
    Generic,
}

impl ElementKind {
    /// Map a lowercase tag name. `<input>` starts out as a text field;
    /// hosts refine it with [`InputType::from_attr`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "html" => Self::Html,
            "body" => Self::Body,
            "iframe" => Self::Iframe,
            "a" => Self::Anchor,
            "button" => Self::Button,
            "input" => Self::Input(InputType::Text),
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "optgroup" => Self::OptGroup,
            "option" => Self::Option,
            "fieldset" => Self::Fieldset,
            _ => Self::Generic,
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Body => "body",
            Self::Iframe => "iframe",
            Self::Anchor => "a",
            Self::Button => "button",
            Self::Input(_) => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::OptGroup => "optgroup",
            Self::Option => "option",
            Self::Fieldset => "fieldset",
            Self::Generic => "div",
        }
    }

    /// Elements that take part in sequential focus navigation without an
    /// explicit tab index. Anchors additionally need an `href`.
    pub fn is_focusable_by_default(&self) -> bool {
        matches!(
            self,
            Self::Anchor
                | Self::Button
                | Self::Input(_)
                | Self::Textarea
                | Self::Select
                | Self::Iframe
        )
    }

    /// Elements whose `disabled` attribute actually disables them.
    pub fn is_form_control(&self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Input(_)
                | Self::Select
                | Self::Textarea
                | Self::OptGroup
                | Self::Option
                | Self::Fieldset
        )
    }

    /// Text-entry elements that may swallow arrow keys.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Textarea)
    }
}

/// The `type` of an `<input>` element, as far as arrow keys care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
    Search,
    Tel,
    Url,
    Email,
    Date,
    Month,
    Number,
    Time,
    Week,
    #[serde(other)]
    Other,
}

impl InputType {
    /// Parse the `type` attribute. A missing or empty attribute is `text`.
    pub fn from_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "password" => Self::Password,
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "email" => Self::Email,
            "date" => Self::Date,
            "month" => Self::Month,
            "number" => Self::Number,
            "time" => Self::Time,
            "week" => Self::Week,
            _ => Self::Other,
        }
    }

    /// Fields where up/down step the value and left/right move the caret.
    pub fn is_spinnable(&self) -> bool {
        matches!(
            self,
            Self::Email | Self::Date | Self::Month | Self::Number | Self::Time | Self::Week
        )
    }

    /// Free-text fields where the caret position decides.
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Password | Self::Search | Self::Tel | Self::Url
        )
    }
}

// -----------------------------------------------------------------------
// Computed style
// -----------------------------------------------------------------------

/// CSS `overflow-x` / `overflow-y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// `true` when this axis establishes a scroll container.
    pub fn is_scrolling(&self) -> bool {
        !matches!(self, Self::Visible | Self::Clip)
    }
}

/// CSS `display` (subset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    Grid,
    None,
}

/// CSS `visibility`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// CSS `position`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Fixed and sticky boxes move relative to their siblings while
    /// scrolling.
    pub fn is_out_of_flow(&self) -> bool {
        matches!(self, Self::Fixed | Self::Sticky)
    }
}

/// `--spatial-navigation-contain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainMode {
    #[default]
    Auto,
    /// The element bounds its own sub-search.
    Contain,
    /// Like `Contain`, but when the element itself wins a search the
    /// search is forwarded to its focusable descendants.
    Delegable,
}

/// `--spatial-navigation-action`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    #[default]
    Auto,
    /// Move focus inside this container, never scroll it.
    Focus,
    /// Scroll this container, never move focus inside it.
    Scroll,
}

/// The computed style properties spatial navigation reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComputedStyle {
    pub display: Display,
    pub visibility: Visibility,
    pub opacity: f64,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub position: Position,
    pub contain: ContainMode,
    pub action: ActionMode,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::Block,
            visibility: Visibility::Visible,
            opacity: 1.0,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            position: Position::Static,
            contain: ContainMode::Auto,
            action: ActionMode::Auto,
        }
    }
}

impl ComputedStyle {
    /// `display` is not `none` and `visibility` is neither `hidden`
    /// nor `collapse`.
    pub fn is_visible(&self) -> bool {
        self.display != Display::None && self.visibility == Visibility::Visible
    }

    /// Both axes scroll.
    pub fn is_scroll_container(&self) -> bool {
        self.overflow_x.is_scrolling() && self.overflow_y.is_scrolling()
    }

    /// Set both overflow axes at once.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }
}

// -----------------------------------------------------------------------
// Focus, scroll, selection
// -----------------------------------------------------------------------

/// Attributes that decide focusability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FocusFlags {
    /// The explicit `tabindex` attribute, if any.
    pub tab_index: Option<i32>,
    /// An anchor with an `href`.
    pub has_href: bool,
    pub disabled: bool,
    /// The element is inert and its document element is not.
    pub inert: bool,
    /// An activation handler is attached.
    pub has_click_handler: bool,
}

/// Scroll offsets and extents of one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    pub fn overflows_x(&self) -> bool {
        self.scroll_width > self.client_width
    }

    pub fn overflows_y(&self) -> bool {
        self.scroll_height > self.client_height
    }
}

/// Caret / selection state of a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
    /// Length of the field's value.
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_mapping() {
        assert_eq!(ElementKind::from_tag("a"), ElementKind::Anchor);
        assert_eq!(
            ElementKind::from_tag("input"),
            ElementKind::Input(InputType::Text)
        );
        assert_eq!(ElementKind::from_tag("section"), ElementKind::Generic);
        assert_eq!(ElementKind::Iframe.tag_name(), "iframe");
    }

    #[test]
    fn default_focusable_kinds() {
        assert!(ElementKind::Button.is_focusable_by_default());
        assert!(ElementKind::Iframe.is_focusable_by_default());
        assert!(!ElementKind::Generic.is_focusable_by_default());
        assert!(!ElementKind::Option.is_focusable_by_default());
    }

    #[test]
    fn form_controls() {
        assert!(ElementKind::Fieldset.is_form_control());
        assert!(!ElementKind::Anchor.is_form_control());
    }

    #[test]
    fn input_type_parse() {
        assert_eq!(InputType::from_attr(""), InputType::Text);
        assert_eq!(InputType::from_attr("NUMBER"), InputType::Number);
        assert_eq!(InputType::from_attr("checkbox"), InputType::Other);
        assert!(InputType::Date.is_spinnable());
        assert!(InputType::Search.is_free_text());
        assert!(!InputType::Other.is_free_text());
    }

    #[test]
    fn overflow_scrolling() {
        assert!(!Overflow::Visible.is_scrolling());
        assert!(!Overflow::Clip.is_scrolling());
        assert!(Overflow::Hidden.is_scrolling());
        assert!(Overflow::Auto.is_scrolling());
    }

    #[test]
    fn scroll_container_needs_both_axes() {
        let mut style = ComputedStyle::default();
        style.overflow_y = Overflow::Auto;
        assert!(!style.is_scroll_container());
        style.overflow_x = Overflow::Hidden;
        assert!(style.is_scroll_container());
    }

    #[test]
    fn style_visibility() {
        let mut style = ComputedStyle::default();
        assert!(style.is_visible());
        style.visibility = Visibility::Collapse;
        assert!(!style.is_visible());
        style.visibility = Visibility::Visible;
        style.display = Display::None;
        assert!(!style.is_visible());
    }

    #[test]
    fn style_deserializes_kebab_case() {
        let style: ComputedStyle =
            toml::from_str("overflow-y = \"scroll\"\noverflow-x = \"auto\"\ncontain = \"delegable\"")
                .unwrap();
        assert!(style.is_scroll_container());
        assert_eq!(style.contain, ContainMode::Delegable);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn scroll_metrics_limits() {
        let m = ScrollMetrics {
            scroll_width: 100.0,
            scroll_height: 500.0,
            client_width: 100.0,
            client_height: 200.0,
            ..Default::default()
        };
        assert!(!m.overflows_x());
        assert!(m.overflows_y());
        assert_eq!(m.max_scroll_top(), 300.0);
        assert_eq!(m.max_scroll_left(), 0.0);
    }
}
