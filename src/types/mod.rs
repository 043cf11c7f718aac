pub mod components;
pub mod jwk;

pub use components::{PrivateComponents, PublicComponents};
pub use jwk::{PrivateJwk, PublicJwk, KTY_RSA};
