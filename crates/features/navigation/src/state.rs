use folio_domain::SectionId;
use folio_kernel::host::Host;
use tracing::debug;

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }
}

/// User input the navigation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The hamburger button.
    ToggleMenu,
    /// Any section link, desktop or mobile.
    FollowLink(SectionId),
    /// The brand control in the header.
    ActivateBrand,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Step {
    pub state: NavState,
    pub effect: Option<NavEffect>,
}

/// Pure transition function. This and [`dispatch`] are the only writers of [`NavState`].
pub fn reduce(mut state: NavState, action: NavAction) -> Step {
    let effect = match action {
        NavAction::ToggleMenu => {
            state.toggle();
            None
        },
        NavAction::FollowLink(_) => {
            state.close();
            None
        },
        NavAction::ActivateBrand => {
            state.close();
            Some(NavEffect::ScrollToTop)
        },
    };
    Step { state, effect }
}

/// Applies `action` to `state` and runs the resulting effect against `host`.
pub fn dispatch(state: &mut NavState, action: NavAction, host: &dyn Host) {
    let step = reduce(*state, action);
    debug!(?action, open = step.state.is_open(), "navigation action");
    *state = step.state;

    if let Some(NavEffect::ScrollToTop) = step.effect {
        host.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!NavState::default().is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = NavState::default();
        state.close();
        assert!(!state.is_open());

        state.toggle();
        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn links_close_without_effects() {
        for section in SectionId::ALL {
            let open = reduce(NavState::default(), NavAction::ToggleMenu).state;
            let step = reduce(open, NavAction::FollowLink(section));
            assert!(!step.state.is_open());
            assert!(step.effect.is_none());
        }
    }

    #[test]
    fn brand_requests_scroll_even_when_closed() {
        let step = reduce(NavState::default(), NavAction::ActivateBrand);
        assert!(!step.state.is_open());
        assert_eq!(step.effect, Some(NavEffect::ScrollToTop));
    }
}
