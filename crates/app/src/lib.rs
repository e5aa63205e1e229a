//! `brewpos-app` — application shell for the point-of-sale front-end.
//!
//! Thin orchestration over the other crates: the auth gateway drives the
//! session store in `brewpos-auth`, the navigation shell and the screen
//! view models read it, and all backend traffic goes through
//! `brewpos-client`. Rendering is left to the embedding UI layer; this
//! crate produces the data every screen needs and nothing more.

pub mod fixtures;
pub mod gateway;
pub mod menu;
pub mod screens;
pub mod table;

pub use gateway::{AuthGateway, LoginFailure};
pub use menu::{Icon, MenuEntry, NavLink, NavShell, menu_for, reports_for};
pub use table::{Pager, SortDir, Sorting, TableRow, TableState};
