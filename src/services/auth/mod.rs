pub mod access_jwt;
pub mod authenticator;
pub mod directory;
pub mod factory;
pub mod principal;

pub use access_jwt::TokenVerifier;
pub use authenticator::Authenticator;
pub use directory::{PgUserDirectory, UserDirectory};
pub use factory::build_authenticator;
pub use principal::Principal;
