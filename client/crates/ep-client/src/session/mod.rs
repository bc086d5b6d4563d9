pub(crate) mod error;
pub(crate) mod file_token_store;
pub(crate) mod memory_token_store;
pub(crate) mod session_context;
pub(crate) mod token_store;
