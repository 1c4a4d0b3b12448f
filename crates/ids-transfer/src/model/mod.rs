//! Domain model types for the data-transfer vocabulary.
//!
//! - [`DataTransfer`]: the entity, immutable once built
//! - [`HashFunction`], [`PayloadDigest`], [`AuthToken`]: composed value objects
//! - [`DataTransferBuilder`], [`AuthTokenBuilder`]: validated construction

pub mod builder;
pub mod transfer;
pub mod value;

pub use builder::{AuthTokenBuilder, DataTransferBuilder};
pub use transfer::DataTransfer;
pub use value::{AuthToken, HashFunction, PayloadDigest};
