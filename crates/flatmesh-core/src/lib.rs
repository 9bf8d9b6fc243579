//! Base types for the flatmesh routing stack.
//!
//! This crate defines the hardware-address newtype used as the opaque
//! table key throughout the stack, along with its length-checked
//! conversions. It carries no protocol logic of its own.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;

pub use types::{InvalidLength, MacAddress};
