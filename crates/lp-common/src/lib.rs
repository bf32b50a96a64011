//! Launchpad Common
//!
//! Cross-cutting infrastructure shared by the platform library and the
//! server binaries. Currently this is the logging bootstrap.

pub mod logging;
