//! Truthiness and input normalization.
//!
//! Every operation in this crate reduces a sequence of truth values.
//! This module defines how arbitrary inputs become that sequence:
//!
//! - [`Truthy`] decides whether a single element counts as true.
//! - [`Group`] turns an argument (a scalar, a collection, or any iterable
//!   wrapped in [`Each`]) into an ordered run of truth values.
//! - [`Value`] is a dynamically typed element for mixed collections.
//!
//! Text and binary blobs are always atomic. A `&str` passed to a reducer
//! is one element, not one element per character. Byte strings should be
//! wrapped in [`Value::Bytes`] to get the same treatment, since a bare
//! `Vec<u8>` is a sequence of integers.

mod group;
mod types;
mod value;

pub use group::{Each, Group, ValueTruths};
pub use types::Truthy;
pub use value::Value;
