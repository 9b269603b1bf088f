//! Navigation event listeners with DOM-style bubbling.

use spatnav_types::{NavEvent, NavEventKind};

use crate::document::NodeId;

/// What a listener wants done with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    Continue,
    PreventDefault,
}

type Callback = Box<dyn FnMut(&NavEvent<NodeId>) -> ListenerAction>;

struct Listener {
    node: NodeId,
    kind: NavEventKind,
    callback: Callback,
}

/// Listeners registered on a document, plus a log of every event
/// dispatched through it.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
    log: Vec<NavEvent<NodeId>>,
}

impl ListenerRegistry {
    pub fn add(
        &mut self,
        node: NodeId,
        kind: NavEventKind,
        callback: impl FnMut(&NavEvent<NodeId>) -> ListenerAction + 'static,
    ) {
        self.listeners.push(Listener {
            node,
            kind,
            callback: Box::new(callback),
        });
    }

    /// Run every matching listener along `path` (target first, root
    /// last). Every listener runs even after one cancels. Returns
    /// `false` if any of them prevented the default action.
    pub fn dispatch(&mut self, event: &NavEvent<NodeId>, path: &[NodeId]) -> bool {
        self.log.push(*event);
        let mut cancelled = false;
        for &node in path {
            for listener in self
                .listeners
                .iter_mut()
                .filter(|l| l.node == node && l.kind == event.kind)
            {
                if (listener.callback)(event) == ListenerAction::PreventDefault {
                    cancelled = true;
                }
            }
        }
        if cancelled {
            log::debug!("{} on node {} cancelled", event.kind.name(), event.target);
        }
        !cancelled
    }

    pub fn log(&self) -> &[NavEvent<NodeId>] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use spatnav_types::Direction;

    use super::*;

    #[test]
    fn no_listeners_means_not_cancelled() {
        let mut reg = ListenerRegistry::default();
        let ev = NavEvent::new(NavEventKind::BeforeFocus, 3, Direction::Right);
        assert!(reg.dispatch(&ev, &[3, 1, 0]));
        assert_eq!(reg.log().len(), 1);
    }

    #[test]
    fn ancestor_listener_sees_bubbled_event() {
        let mut reg = ListenerRegistry::default();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        reg.add(0, NavEventKind::NoTarget, move |_| {
            counter.set(counter.get() + 1);
            ListenerAction::Continue
        });
        let ev = NavEvent::new(NavEventKind::NoTarget, 5, Direction::Up);
        assert!(reg.dispatch(&ev, &[5, 2, 0]));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn prevent_default_cancels() {
        let mut reg = ListenerRegistry::default();
        reg.add(2, NavEventKind::BeforeScroll, |_| ListenerAction::PreventDefault);
        let ev = NavEvent::new(NavEventKind::BeforeScroll, 5, Direction::Down);
        assert!(!reg.dispatch(&ev, &[5, 2, 0]));
    }

    #[test]
    fn other_kinds_are_ignored() {
        let mut reg = ListenerRegistry::default();
        reg.add(5, NavEventKind::BeforeFocus, |_| ListenerAction::PreventDefault);
        let ev = NavEvent::new(NavEventKind::BeforeScroll, 5, Direction::Down);
        assert!(reg.dispatch(&ev, &[5]));
    }

    #[test]
    fn clear_log_empties_history() {
        let mut reg = ListenerRegistry::default();
        let ev = NavEvent::new(NavEventKind::NoTarget, 1, Direction::Left);
        reg.dispatch(&ev, &[1]);
        reg.clear_log();
        assert!(reg.log().is_empty());
    }
}
