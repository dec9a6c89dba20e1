use core::ops::ControlFlow;

/// The result of a single step of sequential iteration.
///
/// A step either succeeds, letting the iteration move on to the next element,
/// or fails, halting it. The failure is handed back to the caller as-is.
///
/// This is implemented for `()`, for steps which cannot fail, and for
/// `Result<(), E>`, for steps which can. A step's output must be one of these
/// two: a step such as `async { map.insert(k, v) }`, whose value is not `()`,
/// has to discard it first (`async { map.insert(k, v); }`).
pub trait Outcome: Sized {
    /// The value an iteration resolves to once every step has succeeded.
    fn success() -> Self;

    /// Whether to continue with the next step, or halt with `self`.
    fn into_flow(self) -> ControlFlow<Self>;
}

impl Outcome for () {
    fn success() -> Self {}

    fn into_flow(self) -> ControlFlow<Self> {
        ControlFlow::Continue(())
    }
}

impl<E> Outcome for Result<(), E> {
    fn success() -> Self {
        Ok(())
    }

    fn into_flow(self) -> ControlFlow<Self> {
        match self {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(Err(err)),
        }
    }
}
