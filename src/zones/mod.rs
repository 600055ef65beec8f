//! Where the weapon tokens are.
//!
//! ## Key Types
//!
//! - `WeaponPlacement`: room → weapon mapping, mutated by suggestions

pub mod weapons;

pub use weapons::WeaponPlacement;
