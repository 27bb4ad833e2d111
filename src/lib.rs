#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
pub mod engine;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::*;
