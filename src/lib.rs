//! Umbrella crate for the workspace. Re-exports [`countries_core`] so the
//! demos under `demos/` can be run from the repository root.

pub use countries_core::*;
