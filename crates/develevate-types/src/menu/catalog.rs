//! Static profile menu catalog
//!
//! The catalog is configuration: items carry an action value, never a
//! closure, so nothing here can read menu-local state.

use crate::route::Route;

/// Icon glyphs used by menus and pages (Lucide names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    User,
    Settings,
    Crown,
    HelpCircle,
    Moon,
    Sun,
    LogOut,
    Code2,
    Zap,
    Trophy,
    Users,
    ArrowRight,
    Star,
    GitBranch,
}

/// What selecting a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Go to a client route
    Navigate(Route),
    /// Clear the session, then go to the login view
    Logout,
}

/// Single selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: Icon,
    pub label: &'static str,
    pub action: MenuAction,
    /// Rendered with the promotional style and a "New" badge
    pub highlight: bool,
}

impl MenuItem {
    pub fn navigate(icon: Icon, label: &'static str, route: Route) -> Self {
        Self {
            icon,
            label,
            action: MenuAction::Navigate(route),
            highlight: false,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// Titled group of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub section: &'static str,
    pub items: Vec<MenuItem>,
}

/// Build the profile menu sections, in display order
pub fn catalog() -> Vec<MenuSection> {
    vec![
        MenuSection {
            section: "Account",
            items: vec![
                MenuItem::navigate(Icon::User, "View Profile", Route::Profile),
                MenuItem::navigate(Icon::Settings, "Settings", Route::Settings),
            ],
        },
        MenuSection {
            section: "Premium",
            items: vec![
                MenuItem::navigate(Icon::Crown, "Upgrade to Pro", Route::Premium).highlighted(),
            ],
        },
        MenuSection {
            section: "Support",
            items: vec![MenuItem::navigate(
                Icon::HelpCircle,
                "Help Center",
                Route::HelpCenter,
            )],
        },
    ]
}
