use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About", href: "/about" },
    NavLink { name: "Projects", href: "/projects" },
    NavLink { name: "Resume", href: "/resume" },
    NavLink { name: "Contact", href: "/contact" },
];

impl NavLink {
    pub fn is_active(&self, pathname: &str) -> bool {
        self.href == pathname
    }
}

/// The two flags driving the navigation bar. Both start false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute `scrolled` from the window's vertical offset.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_route_change(&mut self) {
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_threshold() {
        let mut state = NavState::default();
        state.on_scroll(50.0);
        assert!(!state.scrolled);
        state.on_scroll(50.5);
        assert!(state.scrolled);
        state.on_scroll(0.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_route_change_closes_menu() {
        for link in NAV_LINKS {
            let mut state = NavState::default();
            state.toggle_menu();
            assert!(state.menu_open, "menu should open before navigating to {}", link.href);
            state.on_route_change();
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn test_menu_independent_of_scroll() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.on_scroll(500.0);
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
        assert!(state.scrolled);
    }

    #[test]
    fn test_active_link() {
        assert!(NAV_LINKS[0].is_active("/"));
        assert!(!NAV_LINKS[0].is_active("/about"));
        assert!(NAV_LINKS[2].is_active("/projects"));
    }
}
