//! Command handlers.
//!
//! Handlers are thin wrappers over the packager runner in `CliContext`:
//! they turn parsed arguments into core calls and format the result for
//! the terminal. Resolution and argument rules stay in `appx-core`.

pub mod config;
pub mod locate;
pub mod package;
