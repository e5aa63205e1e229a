//! Role-scoped navigation menus.
//!
//! Static ordered destination lists per role, plus the shell state that
//! turns them into a rendered link list for the current session. Toggle
//! state here is local UI state only; it resets on navigation and is
//! never persisted.

use brewpos_auth::{Identity, Role, Route, SessionReader};

/// Icon glyph names, resolved by the rendering layer's icon set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Products,
    Inventory,
    Sales,
    Expenses,
    Reports,
    History,
    Users,
}

/// One side-menu destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub route: Route,
    pub label: &'static str,
    pub icon: Icon,
}

const fn entry(route: Route, label: &'static str, icon: Icon) -> MenuEntry {
    MenuEntry { route, label, icon }
}

const ADMIN_MENU: &[MenuEntry] = &[
    entry(Route::AdminDashboard, "Dashboard", Icon::Dashboard),
    entry(Route::ProductList, "Product List", Icon::Products),
    entry(Route::Inventory, "Inventory", Icon::Inventory),
    entry(Route::Sales, "Sales", Icon::Sales),
    entry(Route::Expenses, "Expenses", Icon::Expenses),
    entry(Route::Users, "Users", Icon::Users),
];

/// Collapsible sub-panel under the admin "Reports" group.
const ADMIN_REPORTS: &[MenuEntry] = &[
    entry(Route::SalesReport, "Sales Report", Icon::Reports),
    entry(Route::ExpensesReport, "Expenses Report", Icon::Reports),
    entry(Route::ProfitReport, "Profit Report", Icon::Reports),
];

const CASHIER_MENU: &[MenuEntry] = &[
    entry(Route::CashierDashboard, "Dashboard", Icon::Dashboard),
    entry(Route::OrderHistory, "Order History", Icon::History),
];

/// Top-level destinations for a role.
pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Cashier => CASHIER_MENU,
    }
}

/// Report sub-panel destinations for a role (empty for the cashier).
pub fn reports_for(role: Role) -> &'static [MenuEntry] {
    match role {
        Role::Admin => ADMIN_REPORTS,
        Role::Cashier => &[],
    }
}

/// A rendered link: destination plus whether it matches the current route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub entry: MenuEntry,
    pub active: bool,
}

/// Navigation shell bound to a live session.
#[derive(Debug, Clone)]
pub struct NavShell {
    session: SessionReader,
    expanded: bool,
    reports_open: bool,
}

impl NavShell {
    pub fn new(session: SessionReader) -> Self {
        Self {
            session,
            expanded: true,
            reports_open: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn reports_open(&self) -> bool {
        self.reports_open
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_reports(&mut self) {
        self.reports_open = !self.reports_open;
    }

    /// Navigation resets the ephemeral toggles.
    pub fn on_navigate(&mut self) {
        self.expanded = true;
        self.reports_open = false;
    }

    /// Profile block shown at the top of the expanded menu.
    pub fn profile(&self) -> Option<Identity> {
        self.session.snapshot().identity
    }

    /// Link list for the signed-in role, with the entry matching the
    /// current route marked active. Empty while signed out or while a
    /// restoration is still in flight.
    pub fn links(&self, current: Route) -> Vec<NavLink> {
        let session = self.session.snapshot();
        if session.loading {
            return Vec::new();
        }
        let Some(role) = session.role() else {
            return Vec::new();
        };

        let mut links: Vec<NavLink> = menu_for(role)
            .iter()
            .map(|entry| NavLink {
                entry: *entry,
                active: entry.route == current,
            })
            .collect();
        if self.reports_open {
            links.extend(reports_for(role).iter().map(|entry| NavLink {
                entry: *entry,
                active: entry.route == current,
            }));
        }
        links
    }
}
