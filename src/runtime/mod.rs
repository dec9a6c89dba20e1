//! Async event loop support.
//!
//! The way to use this is to call [`block_on()`] with the future you want to
//! drive. The future is polled on the current thread, and the thread is parked
//! whenever the future is pending until its waker is called.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod block_on;

pub use block_on::block_on;

use std::cell::Cell;

std::thread_local! {
    /// Set while a [`block_on`] call is running on this thread.
    static RUNNING: Cell<bool> = const { Cell::new(false) };
}
