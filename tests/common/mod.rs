//! HDR and OpenEXR fixture writers shared by the integration tests.
//!
//! Pulled in with `mod common;`; not every test binary uses every writer.

#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use fixtures::*;
