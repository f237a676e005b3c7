use std::rc::Rc;

use yew::Reducible;

/// Inputs that can open or close the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    ToggleActivated,
    BackdropClicked,
    LinkActivated,
    EscapePressed,
    Resized { width: f64 },
}

/// Side effects the DOM layer owes after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// Lock body scroll, then focus the first link after a short delay.
    Opened,
    /// Unlock body scroll and optionally hand focus back to the toggle.
    Closed { restore_focus: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuState {
    pub open: bool,
    pub breakpoint: u32,
    /// Last transition that changed `open`; drives the DOM side effects.
    pub last: Transition,
}

impl MenuState {
    pub fn closed(breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
            last: Transition::Unchanged,
        }
    }

    /// What `event` would do from the current state, without applying it.
    pub fn transition(&self, event: MenuEvent) -> Transition {
        use MenuEvent::*;

        match (self.open, event) {
            (false, ToggleActivated) => Transition::Opened,
            (true, ToggleActivated | BackdropClicked | LinkActivated | EscapePressed) => {
                Transition::Closed {
                    restore_focus: true,
                }
            }
            (true, Resized { width }) if width > f64::from(self.breakpoint) => {
                Transition::Closed {
                    restore_focus: false,
                }
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn apply(&mut self, event: MenuEvent) -> Transition {
        let transition = self.transition(event);
        match transition {
            Transition::Opened => self.open = true,
            Transition::Closed { .. } => self.open = false,
            Transition::Unchanged => return transition,
        }
        self.last = transition;
        transition
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.transition(action) == Transition::Unchanged {
            return self;
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
