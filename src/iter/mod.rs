//! Sequential async iteration over slices.
//!
//! Each element is handed to a callback together with its position and the
//! slice itself. The future the callback returns is awaited to completion
//! before the next element is visited, so no two steps are ever in flight at
//! the same time. The first step which fails halts the iteration, and its
//! error is returned unchanged.
//!
//! ```
//! use std::cell::RefCell;
//! use wait_each::prelude::*;
//! use wait_each::runtime::block_on;
//!
//! let seen = &RefCell::new(Vec::new());
//! block_on([1, 2, 3].wait_each(|n, _, _| async move {
//!     seen.borrow_mut().push(*n);
//! }));
//! assert_eq!(*seen.borrow(), [1, 2, 3]);
//! ```

mod outcome;
mod wait_each;

pub use self::wait_each::WaitEach;
pub use outcome::Outcome;

use core::future::IntoFuture;

/// Visit every element of `list` in order, awaiting `callback` for each one.
///
/// `callback` is called with the element, its position, and `list`. It may
/// return any [`IntoFuture`] whose output is an [`Outcome`]: `()` when the
/// step cannot fail, and `Result<(), E>` when it can. Steps which complete
/// immediately can return [`core::future::ready`].
///
/// The returned future resolves once every element has been visited. If a
/// step resolves to `Err(e)`, no further elements are visited and the future
/// resolves to that same `Err(e)`.
///
/// Nothing happens until the returned future is polled. There is no
/// cancellation beyond dropping the future, and no timeout: a step which
/// never completes stalls the iteration.
///
/// # Example
///
/// ```
/// use core::future::ready;
/// use wait_each::iter::wait_each;
/// use wait_each::runtime::block_on;
///
/// #[derive(Debug, PartialEq)]
/// struct TooBig(u32);
///
/// let mut seen = Vec::new();
/// let res = block_on(wait_each(&[1, 2, 3], |n, _, _| {
///     if *n == 2 {
///         return ready(Err(TooBig(*n)));
///     }
///     seen.push(*n);
///     ready(Ok(()))
/// }));
/// assert_eq!(res, Err(TooBig(2)));
/// assert_eq!(seen, [1]);
/// ```
pub fn wait_each<'a, T, F, Fut>(list: &'a [T], callback: F) -> WaitEach<'a, T, F, Fut>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: IntoFuture,
    Fut::Output: Outcome,
{
    WaitEach::new(list, callback)
}

/// Extend slices with sequential async iteration.
///
/// Bring this into scope through [`crate::prelude`] to call `.wait_each` on
/// slices, arrays, `Vec`s, and anything else which dereferences to `[T]`.
pub trait WaitEachExt<T> {
    /// Visit every element in order, awaiting `callback` for each one.
    ///
    /// This is the same as calling [`wait_each`](fn@wait_each) with `self` as the list.
    fn wait_each<'a, F, Fut>(&'a self, callback: F) -> WaitEach<'a, T, F, Fut>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: IntoFuture,
        Fut::Output: Outcome;
}

impl<T> WaitEachExt<T> for [T] {
    fn wait_each<'a, F, Fut>(&'a self, callback: F) -> WaitEach<'a, T, F, Fut>
    where
        T: 'a,
        F: FnMut(&'a T, usize, &'a [T]) -> Fut,
        Fut: IntoFuture,
        Fut::Output: Outcome,
    {
        wait_each(self, callback)
    }
}
