use crate::state::NavState;
use folio_domain::config::NavigationConfig;
use strum::IntoStaticStr;

const BAR: &str = "block h-0.5 w-5 rounded-full bg-current";

/// Glyph of the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MenuIcon {
    /// Three horizontal bars.
    Bars,
    /// The bars folded into an X.
    Close,
}

impl MenuIcon {
    /// Classes for the top, middle and bottom bar.
    #[must_use]
    pub fn bar_classes(self) -> [String; 3] {
        let (top, middle, bottom) = match self {
            Self::Bars => ("", "opacity-100", ""),
            Self::Close => ("translate-y-1.5 rotate-45", "opacity-0", "-translate-y-1.5 -rotate-45"),
        };
        [
            format!("{BAR} transition-transform {top}").trim_end().to_owned(),
            format!("{BAR} transition-all {middle}"),
            format!("{BAR} transition-transform {bottom}").trim_end().to_owned(),
        ]
    }

    /// Screen-reader text of the button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bars => "Open main menu",
            Self::Close => "Close main menu",
        }
    }
}

/// Collapsed or expanded panel geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    pub max_height: String,
    pub opacity: u8,
    pub transition_ms: u64,
}

impl PanelStyle {
    /// Inline CSS; only `max-height` and `opacity` transition.
    #[must_use]
    pub fn style(&self) -> String {
        let ms = self.transition_ms;
        format!(
            "max-height: {}; opacity: {}; overflow: hidden; \
             transition: max-height {ms}ms ease, opacity {ms}ms ease;",
            self.max_height, self.opacity
        )
    }
}

/// Everything the header renders from the navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
    /// Value of the menu button's `aria-expanded`.
    pub aria_expanded: &'static str,
    pub icon: MenuIcon,
    pub panel: PanelStyle,
}

impl NavView {
    #[must_use]
    pub fn project(state: NavState, config: &NavigationConfig) -> Self {
        let open = state.is_open();
        let (icon, max_height, opacity) = if open {
            (MenuIcon::Close, config.expanded_height.clone(), 1)
        } else {
            (MenuIcon::Bars, "0".to_owned(), 0)
        };

        Self {
            open,
            aria_expanded: if open { "true" } else { "false" },
            icon,
            panel: PanelStyle { max_height, opacity, transition_ms: config.transition_ms },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_view() {
        let view = NavView::project(NavState::default(), &NavigationConfig::default());

        assert_eq!(view.aria_expanded, "false");
        assert_eq!(view.icon, MenuIcon::Bars);
        assert_eq!(
            view.panel.style(),
            "max-height: 0; opacity: 0; overflow: hidden; \
             transition: max-height 300ms ease, opacity 300ms ease;"
        );
    }

    #[test]
    fn open_view() {
        let mut state = NavState::default();
        state.toggle();
        let view = NavView::project(state, &NavigationConfig::default());

        assert_eq!(view.aria_expanded, "true");
        assert_eq!(view.icon, MenuIcon::Close);
        assert!(view.panel.style().starts_with("max-height: 12rem; opacity: 1;"));
    }

    #[test]
    fn bars_fold_into_a_cross() {
        let bars = MenuIcon::Bars.bar_classes();
        let cross = MenuIcon::Close.bar_classes();

        assert!(!bars[0].contains("rotate"));
        assert!(cross[0].ends_with("rotate-45"));
        assert!(cross[1].ends_with("opacity-0"));
        assert!(cross[2].ends_with("-rotate-45"));
    }
}
