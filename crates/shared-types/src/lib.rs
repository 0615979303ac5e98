//! # Shared Types Crate
//!
//! This crate contains the transfer entities exchanged between the chain-event
//! decoder, the commit-safety subsystems and the storage writer.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Raw Addresses**: An [`Address`] is 20 raw bytes. Hex is only the wire
//!   encoding; no checksumming or case folding ever reaches the domain.
//! - **Unbounded Amounts**: A [`TransferAmount`] is an arbitrary-precision,
//!   sign-aware integer. Range checks belong to the consumers, not the type.

pub mod amount;
pub mod entities;
pub mod errors;

pub use amount::TransferAmount;
pub use entities::*;
pub use errors::*;
