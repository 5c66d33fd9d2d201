//! Port definitions (trait interfaces) for external dependencies.
//!
//! Ports define the contracts that adapters must implement, keeping the
//! domain and application layers independent of infrastructure choices.

mod cart_store;
mod password_hasher;
mod product_catalog;
mod token_issuer;
mod token_verifier;
mod user_store;

pub use cart_store::CartStore;
pub use password_hasher::PasswordHasher;
pub use product_catalog::{price_sheet, ProductCatalog};
pub use token_issuer::TokenIssuer;
pub use token_verifier::TokenVerifier;
pub use user_store::UserStore;
