use super::RUNNING;

use core::future::Future;
use core::pin::pin;
use core::task::Waker;
use core::task::{Context, Poll};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Wake;
use std::thread::{self, Thread};

/// Start the event loop
///
/// # Panics
///
/// Panics when called from inside another `block_on` on the same thread.
pub fn block_on<Fut>(fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    if RUNNING.replace(true) {
        panic!("cannot wait_each::runtime::block_on inside an existing block_on!")
    }
    let _guard = RunningGuard;

    // Pin the future so it can be polled
    let mut fut = pin!(fut);

    // Create a new context to be passed to the future.
    let waker_impl = Arc::new(ThreadWaker::new(thread::current()));
    let waker = Waker::from(Arc::clone(&waker_impl));
    let mut cx = Context::from_waker(&waker);

    // Either the future completes and we return, or we park until someone
    // wakes us up.
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(res) => break res,
            Poll::Pending => waker_impl.park(),
        }
    }
}

/// Clears the running flag, also when the future panics.
struct RunningGuard;

impl Drop for RunningGuard {
    fn drop(&mut self) {
        RUNNING.set(false);
    }
}

struct ThreadWaker {
    awake: AtomicBool,
    thread: Thread,
}

impl ThreadWaker {
    fn new(thread: Thread) -> Self {
        Self {
            awake: AtomicBool::new(false),
            thread,
        }
    }

    /// Block the current thread until `wake` has been called at least once
    /// since the last time we parked.
    fn park(&self) {
        while !self.awake.swap(false, Ordering::Acquire) {
            thread::park();
        }
    }
}

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.awake.store(true, Ordering::Release);
        self.thread.unpark();
    }
}
