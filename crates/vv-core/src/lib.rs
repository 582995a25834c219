pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::identity::Identity;
pub use models::register_profile::RegisterProfile;
pub use models::role::Role;

#[cfg(test)]
mod tests;
