#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod metadata;

pub use ecosystem::*;
pub use metadata::*;
