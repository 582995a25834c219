pub mod identity;
pub mod register_profile;
pub mod role;
