// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile-menu state machine.
//!
//! The menu has exactly two states, Closed (initial) and Open. The toggle
//! button flips the state; clicking a menu link or clicking anywhere outside
//! the navbar closes it unconditionally. Each transition is reported as a
//! [`MenuTransition`] so the web layer can apply the class flags,
//! `aria-expanded`, and the page scroll lock in one place.

/// Inputs the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    /// The toggle button was clicked.
    ToggleClick,
    /// A link inside the menu was clicked.
    LinkClick,
    /// A click landed outside the navbar while the menu may be open.
    OutsideClick,
}

/// The mobile menu's state.
///
/// Construct with [`MenuState::default`] (Closed) and drive with
/// [`apply`](Self::apply).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Menu hidden, page scroll unlocked.
    #[default]
    Closed,
    /// Menu shown, page scroll locked.
    Open,
}

/// The outcome of feeding one [`MenuEvent`] to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuTransition {
    /// The state after the event.
    pub open: bool,
    /// Whether the state actually changed. When `false` the web layer has
    /// nothing to write: closing an already-closed menu is a no-op.
    pub changed: bool,
}

impl MenuState {
    /// Returns `true` while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Feeds one event to the machine and returns the resulting transition.
    ///
    /// `ToggleClick` flips the state; `LinkClick` and `OutsideClick` always
    /// land in Closed.
    pub fn apply(&mut self, event: MenuEvent) -> MenuTransition {
        let next = match (*self, event) {
            (Self::Closed, MenuEvent::ToggleClick) => Self::Open,
            (Self::Open, MenuEvent::ToggleClick)
            | (_, MenuEvent::LinkClick | MenuEvent::OutsideClick) => Self::Closed,
        };
        let changed = next != *self;
        *self = next;
        MenuTransition {
            open: next.is_open(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_states() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        let t = menu.apply(MenuEvent::ToggleClick);
        assert!(t.open && t.changed);
        assert!(menu.is_open());

        let t = menu.apply(MenuEvent::ToggleClick);
        assert!(!t.open && t.changed);
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_from_open() {
        let mut menu = MenuState::Open;
        let t = menu.apply(MenuEvent::LinkClick);
        assert_eq!(
            t,
            MenuTransition {
                open: false,
                changed: true
            }
        );
    }

    #[test]
    fn close_is_idempotent() {
        // Closing an already-closed menu leaves state unchanged and reports
        // nothing to write (no scroll-lock churn).
        let mut menu = MenuState::Closed;
        for event in [MenuEvent::LinkClick, MenuEvent::OutsideClick] {
            let t = menu.apply(event);
            assert!(!t.open);
            assert!(!t.changed);
            assert_eq!(menu, MenuState::Closed);
        }
    }

    #[test]
    fn outside_click_closes_from_open() {
        let mut menu = MenuState::Open;
        let t = menu.apply(MenuEvent::OutsideClick);
        assert!(t.changed && !t.open);
    }
}
