use core::future::{Future, IntoFuture};
use core::ops::ControlFlow;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::ready;
use pin_project_lite::pin_project;

use super::Outcome;

pin_project! {
    /// Visits the elements of a slice one at a time, awaiting each step.
    ///
    /// This `struct` is created by the [`wait_each`] function and the
    /// [`wait_each`][WaitEachExt::wait_each] method on [`WaitEachExt`]. See
    /// their documentation for more.
    ///
    /// [`wait_each`]: fn@crate::iter::wait_each
    /// [`WaitEachExt`]: crate::iter::WaitEachExt
    /// [WaitEachExt::wait_each]: crate::iter::WaitEachExt::wait_each
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct WaitEach<'a, T, F, Fut>
    where
        Fut: IntoFuture,
    {
        list: &'a [T],
        callback: F,
        index: usize,
        #[pin]
        step: Option<Fut::IntoFuture>,
        state: State,
    }
}

/// The internal state
#[derive(Debug)]
enum State {
    /// Ready to start the step at `index`, if there is one.
    Started,
    /// Waiting for the step at `index` to settle.
    PollStep,
    /// Every step ran, or one of them failed.
    Completed,
}

impl<'a, T, F, Fut> WaitEach<'a, T, F, Fut>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: IntoFuture,
{
    pub(super) fn new(list: &'a [T], callback: F) -> Self {
        Self {
            list,
            callback,
            index: 0,
            step: None,
            state: State::Started,
        }
    }
}

impl<'a, T, F, Fut> Future for WaitEach<'a, T, F, Fut>
where
    F: FnMut(&'a T, usize, &'a [T]) -> Fut,
    Fut: IntoFuture,
    Fut::Output: Outcome,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.state {
                State::Started => {
                    let list: &'a [T] = *this.list;
                    let index = *this.index;
                    if index >= list.len() {
                        tracing::trace!(len = list.len(), "finished visiting all elements");
                        *this.state = State::Completed;
                        return Poll::Ready(Outcome::success());
                    }
                    tracing::trace!(index, len = list.len(), "visiting element");
                    // A panicking callback leaves us completed, so it is never
                    // called twice for the same element.
                    *this.state = State::Completed;
                    let step = (this.callback)(&list[index], index, list).into_future();
                    this.step.set(Some(step));
                    *this.state = State::PollStep;
                }
                State::PollStep => {
                    let outcome = match this.step.as_mut().as_pin_mut() {
                        Some(step) => ready!(step.poll(cx)),
                        None => unreachable!("a step is always stored before polling it"),
                    };
                    this.step.set(None);
                    if let ControlFlow::Break(failure) = outcome.into_flow() {
                        tracing::debug!(index = *this.index, "step failed, halting iteration");
                        *this.state = State::Completed;
                        return Poll::Ready(failure);
                    }
                    *this.index += 1;
                    *this.state = State::Started;
                }
                State::Completed => panic!("future polled after completing"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runtime::block_on;
    use core::future::ready;
    use std::cell::RefCell;
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Debug, PartialEq)]
    struct Boom(usize);

    #[test]
    fn visits_in_order_with_position_and_list() {
        let data = [10, 20, 30];
        let seen = RefCell::new(Vec::new());
        block_on(WaitEach::new(&data, |item, index, list| {
            assert!(core::ptr::eq(list, &data[..]));
            seen.borrow_mut().push((*item, index));
            ready(())
        }));
        assert_eq!(*seen.borrow(), [(10, 0), (20, 1), (30, 2)]);
    }

    #[test]
    fn empty_is_ready_on_first_poll() {
        let calls = RefCell::new(0);
        let fut = WaitEach::new(&[] as &[u8], |_, _, _| {
            *calls.borrow_mut() += 1;
            ready(())
        });
        let res = block_on(futures_lite::future::poll_once(fut));
        assert_eq!(res, Some(()));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn does_nothing_until_polled() {
        let calls = RefCell::new(0);
        let fut = WaitEach::new(&[1, 2], |_, _, _| {
            *calls.borrow_mut() += 1;
            ready(())
        });
        drop(fut);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn halts_on_first_failure() {
        let seen = RefCell::new(Vec::new());
        let res = block_on(WaitEach::new(&[1, 2, 3, 4], |item, index, _| {
            seen.borrow_mut().push(*item);
            ready(if *item >= 2 { Err(Boom(index)) } else { Ok(()) })
        }));
        assert_eq!(res, Err(Boom(1)));
        assert_eq!(*seen.borrow(), [1, 2]);
    }

    #[test]
    #[should_panic(expected = "future polled after completing")]
    fn polled_after_completion_panics() {
        let mut fut = core::pin::pin!(WaitEach::new(&[1], |_, _, _| ready(())));
        block_on(core::future::poll_fn(|cx| {
            assert!(fut.as_mut().poll(cx).is_ready());
            fut.as_mut().poll(cx)
        }));
    }

    #[test]
    fn panicking_step_is_not_called_again() {
        let calls = RefCell::new(Vec::new());
        let mut fut = core::pin::pin!(WaitEach::new(&[1, 2], |_, index, _| {
            calls.borrow_mut().push(index);
            if index == 0 {
                panic!("step panicked");
            }
            ready(())
        }));
        block_on(core::future::poll_fn(|cx| {
            let first = panic::catch_unwind(AssertUnwindSafe(|| fut.as_mut().poll(cx)));
            assert!(first.is_err());
            let second = panic::catch_unwind(AssertUnwindSafe(|| fut.as_mut().poll(cx)));
            let message = second.unwrap_err().downcast::<&str>().unwrap();
            assert_eq!(*message, "future polled after completing");
            Poll::Ready(())
        }));
        assert_eq!(*calls.borrow(), [0]);
    }
}
