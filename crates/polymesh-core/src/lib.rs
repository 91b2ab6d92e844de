//! Polymesh Core
//!
//! Ambient services shared by the polymesh crates: log bootstrap and
//! profiling scopes.

pub mod logging;
pub mod profiling;
