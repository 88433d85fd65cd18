mod identity;
mod identity_id;
mod role;
