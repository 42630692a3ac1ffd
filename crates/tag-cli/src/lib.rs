//! Library side of the `tagger` binary: session state, configuration, and
//! logging setup.

pub mod config;
pub mod logging;
pub mod session;
