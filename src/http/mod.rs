//! HTTP protocol layer
//!
//! Response builders shared by the page and API handlers, decoupled from any
//! specific route.

pub mod response;

pub use response::{html_response, json_response};
