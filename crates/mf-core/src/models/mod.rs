pub mod identity;
pub mod identity_id;
pub mod role;
pub mod sign_up_request;
