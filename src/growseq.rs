//! Core modules
//!
//! - [`sequence`]: the growable sequence itself
//! - [`sink`]: line-oriented output targets
//! - [`driver`]: the fruit demonstration
//! - [`walkthrough`]: greeting, conditionals, loops and identifiers

pub mod driver;
pub mod sequence;
pub mod sink;
pub mod walkthrough;
