//! Request handling module
//!
//! `router` dispatches method+path pairs; `pages` renders the HTML views.

pub mod pages;
pub mod router;

pub use router::handle_request;
