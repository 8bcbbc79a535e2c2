pub mod cookie;
pub mod store;

pub use cookie::{SESSION_COOKIE, SessionCookie, set_cookie_value};
pub use store::{RosterState, Session, SessionStore};
