#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
