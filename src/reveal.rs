//! One-shot entrance reveal for sections scrolling into view.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visibility latch for a section's entrance animation.
///
/// One-way: `Hidden` becomes `Revealed` the first time the element
/// intersects the viewport and never reverts, even if the element scrolls
/// back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one intersection measurement into the latch.
    pub fn observe(self, intersecting: bool) -> RevealState {
        match (self, intersecting) {
            (RevealState::Hidden, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Observes the returned node and flips the returned signal to `true` once
/// the node is at least 10% visible.
///
/// The observer disconnects itself after the first trigger; it is also
/// released when the owning component is torn down.
pub fn use_reveal() -> (NodeRef<Div>, Signal<bool>) {
    let target = NodeRef::<Div>::new();
    let (state, set_state) = signal(RevealState::default());

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            set_state.update(|s| *s = s.observe(intersecting));
            if state.get_untracked().is_revealed() {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let revealed = Signal::derive(move || state.get().is_revealed());
    (target, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_intersecting() {
        let state = RevealState::default();
        assert!(!state.is_revealed());
        assert_eq!(state.observe(false), RevealState::Hidden);
    }

    #[test]
    fn test_reveals_on_first_intersection() {
        assert_eq!(RevealState::Hidden.observe(true), RevealState::Revealed);
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut state = RevealState::Hidden;
        for intersecting in [false, true, false, false, true, false] {
            state = state.observe(intersecting);
        }
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(state.observe(false), RevealState::Revealed);
    }
}
