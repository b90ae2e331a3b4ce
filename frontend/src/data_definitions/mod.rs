pub mod url_param;
pub mod search_context;
