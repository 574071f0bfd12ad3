#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

pub mod error;
pub mod model;
pub mod response;

// Re-export main types
pub use error::ModelsError;
pub use model::{Model, ModelFamily};
pub use response::ModelListResponse;
