mod identity;
mod register_profile;
mod role;
