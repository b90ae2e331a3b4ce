//! Common library exports shared between frontend, search state and backend.

extern crate serde;


pub mod search_query;
pub mod query_string;
pub mod search_result;
pub mod facets;
pub mod search_const;
pub mod search_api;
