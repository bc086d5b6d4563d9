pub(crate) mod login_request;
pub(crate) mod login_response;
pub(crate) mod user;
pub(crate) mod user_page;
pub(crate) mod user_response;
pub(crate) mod user_update;
