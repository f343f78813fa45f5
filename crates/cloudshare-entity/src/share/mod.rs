//! Share domain entities.

pub mod model;
pub mod permissions;
pub mod wire;

pub use model::{Share, ShareType};
pub use permissions::SharePermissions;
pub use wire::{RawShare, ShareListPayload, SharePayload};
