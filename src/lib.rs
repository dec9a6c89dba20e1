#![warn(future_incompatible, unreachable_pub)]
//#![deny(missing_debug_implementations)]
//#![warn(missing_docs)]

//! Sequential async iteration over slices
//!
//! This crate provides one thing: visiting the elements of a slice one at a
//! time, awaiting an async step for each element before moving on to the next.
//! Steps never overlap, run in index order, and the first failing step halts
//! the iteration with its own error.
//!
//! # Examples
//!
//! ```rust,no_run
#![doc = include_str!("../demos/sequential_log.rs")]
//! ```
//!
//! # Design Decisions
//!
//! Iteration is exposed two ways: as the free function [`iter::wait_each`](fn@iter::wait_each),
//! and as a method on every slice through the [`iter::WaitEachExt`] trait.
//! Importing [`prelude`] makes the method available on all slices, arrays and
//! `Vec`s at once, without wrapping each value.
//!
//! A step may be any [`IntoFuture`](core::future::IntoFuture). Steps which
//! complete immediately can use [`core::future::ready`], so there is no
//! separate synchronous and asynchronous path. Steps which can fail resolve
//! to `Result<(), E>`; this crate adds no error type of its own.
//!
//! There is no concurrency of any kind. [`runtime::block_on`] drives a future
//! on the current thread, and [`test`] wraps `async fn` tests with it.

pub mod iter;
pub mod runtime;

pub use wait_each_macro::attr_macro_test as test;

pub mod prelude {
    pub use crate::iter::WaitEachExt as _;
}
