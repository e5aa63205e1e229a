//! `brewpos-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. It owns who
//! is signed in (session), which roles may see which screens (policy), and
//! the decision for a single navigation attempt (guard). The HTTP side
//! lives in `brewpos-client`; orchestration lives in `brewpos-app`.

pub mod guard;
pub mod identity;
pub mod policy;
pub mod roles;
pub mod session;

pub use guard::{DenialReason, RouteDecision, RouteGuard, evaluate};
pub use identity::Identity;
pub use policy::Route;
pub use roles::Role;
pub use session::{AuthTransition, Session, SessionReader, SessionStore};
