#![forbid(unsafe_code)]

//! Shared callbacks and deferred triggers.
//!
//! A [`Callback`] turns an argument into a message. Components receive a
//! reference-counted handle to it and never call it while rendering; instead
//! they [`bind`](Callback::bind) their argument into a [`Trigger`], a
//! no-argument closure that the frame stores and only fires when the matching
//! event arrives.
//!
//! Both types compare by pointer identity, so a parent that keeps the same
//! callback instance across renders lets memoized children skip work.

use std::fmt;
use std::rc::Rc;

/// A shared, pointer-comparable `Fn(A) -> M`.
pub struct Callback<A, M> {
    f: Rc<dyn Fn(A) -> M>,
}

impl<A, M> Clone for Callback<A, M> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<A, M> fmt::Debug for Callback<A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("addr", &format_args!("{:#x}", self.addr()))
            .finish()
    }
}

impl<A, M> Callback<A, M> {
    /// Whether both handles share the same closure.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }

    /// Address of the shared closure, for hashing identity into cache keys.
    #[inline]
    #[must_use]
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.f).cast::<()>() as usize
    }
}

impl<A: 'static, M: 'static> Callback<A, M> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(A) -> M + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Invoke the callback now.
    pub fn emit(&self, arg: A) -> M {
        (self.f)(arg)
    }

    /// Capture `arg` into a deferred trigger. Nothing runs until the trigger fires.
    #[must_use]
    pub fn bind(&self, arg: A) -> Trigger<M>
    where
        A: Clone,
    {
        let f = Rc::clone(&self.f);
        Trigger::new(move || f(arg.clone()))
    }
}

/// A deferred, no-argument message producer.
pub struct Trigger<M> {
    f: Rc<dyn Fn() -> M>,
}

impl<M> Clone for Trigger<M> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<M> fmt::Debug for Trigger<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Trigger(..)")
    }
}

impl<M: 'static> Trigger<M> {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> M + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Produce the message.
    pub fn fire(&self) -> M {
        (self.f)()
    }

    /// Convert the produced message, used when a child frame is embedded in a
    /// parent with a different message type.
    #[must_use]
    pub fn map<N: 'static>(self, map: Rc<dyn Fn(M) -> N>) -> Trigger<N> {
        let inner = self.f;
        Trigger::new(move || map(inner()))
    }
}
