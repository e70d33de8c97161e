//! Data model types

mod device;
mod identifier;

pub use device::Device;
pub use device::is_provisioned;
pub use identifier::NameOrId;
pub use identifier::UuidOrId;
