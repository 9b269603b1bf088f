//! Arrow keys inside text fields.
//!
//! A focused text field keeps arrow presses that move its caret; only
//! presses that would run off the end of the value navigate.

use spatnav_types::{Direction, ElementKind, TextSelection};

/// Whether an arrow press in `dir` on an element of `kind` should
/// navigate rather than be left to the element.
///
/// - Spinnable inputs (number, date, ...) step their value on up/down and
///   navigate on left/right.
/// - Free-text inputs and textareas release left/up when the selection
///   starts at 0 and right/down when it ends at the end of the value.
/// - Every other element navigates.
pub fn arrow_navigates(
    kind: ElementKind,
    selection: Option<TextSelection>,
    dir: Direction,
) -> bool {
    let free_text = match kind {
        ElementKind::Input(ty) if ty.is_spinnable() => return dir.is_horizontal(),
        ElementKind::Input(ty) => ty.is_free_text(),
        ElementKind::Textarea => true,
        _ => false,
    };
    if !free_text {
        return true;
    }
    let sel = selection.unwrap_or_default();
    match dir {
        Direction::Left | Direction::Up => sel.start == 0,
        Direction::Right | Direction::Down => sel.end == sel.len,
    }
}

#[cfg(test)]
mod tests {
    use spatnav_types::InputType;

    use super::*;

    fn caret(start: usize, end: usize, len: usize) -> Option<TextSelection> {
        Some(TextSelection { start, end, len })
    }

    #[test]
    fn non_editable_always_navigates() {
        for dir in Direction::ALL {
            assert!(arrow_navigates(ElementKind::Button, None, dir));
        }
    }

    #[test]
    fn spinnable_keeps_vertical_for_stepping() {
        let kind = ElementKind::Input(InputType::Number);
        assert!(!arrow_navigates(kind, caret(1, 1, 3), Direction::Up));
        assert!(!arrow_navigates(kind, caret(1, 1, 3), Direction::Down));
        assert!(arrow_navigates(kind, caret(1, 1, 3), Direction::Left));
        assert!(arrow_navigates(kind, caret(1, 1, 3), Direction::Right));
    }

    #[test]
    fn text_caret_in_middle_keeps_everything() {
        let kind = ElementKind::Input(InputType::Text);
        for dir in Direction::ALL {
            assert!(!arrow_navigates(kind, caret(2, 2, 5), dir));
        }
    }

    #[test]
    fn text_caret_at_start_releases_left_and_up() {
        let kind = ElementKind::Input(InputType::Search);
        assert!(arrow_navigates(kind, caret(0, 0, 5), Direction::Left));
        assert!(arrow_navigates(kind, caret(0, 0, 5), Direction::Up));
        assert!(!arrow_navigates(kind, caret(0, 0, 5), Direction::Right));
    }

    #[test]
    fn text_caret_at_end_releases_right_and_down() {
        let kind = ElementKind::Textarea;
        assert!(arrow_navigates(kind, caret(5, 5, 5), Direction::Right));
        assert!(arrow_navigates(kind, caret(5, 5, 5), Direction::Down));
        assert!(!arrow_navigates(kind, caret(5, 5, 5), Direction::Left));
    }

    #[test]
    fn empty_field_releases_all() {
        let kind = ElementKind::Input(InputType::Password);
        for dir in Direction::ALL {
            assert!(arrow_navigates(kind, caret(0, 0, 0), dir));
        }
    }

    #[test]
    fn selection_spanning_whole_value() {
        let kind = ElementKind::Input(InputType::Url);
        for dir in Direction::ALL {
            assert!(arrow_navigates(kind, caret(0, 4, 4), dir));
        }
    }

    #[test]
    fn other_input_types_navigate() {
        let kind = ElementKind::Input(InputType::Other);
        assert!(arrow_navigates(kind, None, Direction::Left));
    }
}
