//! Role-to-route policy.
//!
//! Static configuration, fixed at build time. The permitted-role table is a
//! total match over [`Route`], so adding a screen without deciding who may
//! see it does not compile.

use crate::Role;

/// Application route identifiers, one per screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public login screen, mounted at "/".
    Login,
    AdminDashboard,
    ProductList,
    Sales,
    Expenses,
    SalesReport,
    ExpensesReport,
    ProfitReport,
    Inventory,
    Users,
    CashierDashboard,
    OrderHistory,
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Login,
        Route::AdminDashboard,
        Route::ProductList,
        Route::Sales,
        Route::Expenses,
        Route::SalesReport,
        Route::ExpensesReport,
        Route::ProfitReport,
        Route::Inventory,
        Route::Users,
        Route::CashierDashboard,
        Route::OrderHistory,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::AdminDashboard => "/admin-dashboard",
            Route::ProductList => "/product-list",
            Route::Sales => "/sales",
            Route::Expenses => "/expenses",
            Route::SalesReport => "/sales-report",
            Route::ExpensesReport => "/expenses-report",
            Route::ProfitReport => "/profit-report",
            Route::Inventory => "/inventory",
            Route::Users => "/users",
            Route::CashierDashboard => "/cashier-dashboard",
            Route::OrderHistory => "/order-history",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Breadcrumb caption for the screen.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "LOGIN",
            Route::AdminDashboard | Route::CashierDashboard => "DASHBOARD",
            Route::ProductList => "PRODUCT LIST",
            Route::Sales => "SALES MANAGEMENT",
            Route::Expenses => "EXPENSES MANAGEMENT",
            Route::SalesReport => "SALES REPORT",
            Route::ExpensesReport => "EXPENSES REPORT",
            Route::ProfitReport => "PROFIT REPORT",
            Route::Inventory => "INVENTORY MANAGEMENT",
            Route::Users => "USERS",
            Route::OrderHistory => "ORDER HISTORY",
        }
    }

    /// Roles permitted to view the route. Empty means public; the login
    /// route is the only public one.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Route::Login => &[],
            Route::AdminDashboard
            | Route::ProductList
            | Route::Sales
            | Route::Expenses
            | Route::SalesReport
            | Route::ExpensesReport
            | Route::ProfitReport => &[Role::Admin],
            Route::Inventory | Route::Users => &[Role::Admin, Role::Cashier],
            Route::CashierDashboard | Route::OrderHistory => &[Role::Cashier],
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles().is_empty()
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}
