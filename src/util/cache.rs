//! Single-slot memoization with a time-to-live.

use std::time::{Duration, Instant};

struct CacheEntry<R> {
    value: R,
    /// `None` never expires.
    expiry: Option<Instant>,
}

impl<R> CacheEntry<R> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expiry.map_or(true, |expiry| now < expiry)
    }
}

/// Holds at most one value together with the instant it goes stale.
///
/// Time is passed in by the caller so expiry can be checked against any
/// clock reading.
pub struct TtlSlot<R> {
    entry: Option<CacheEntry<R>>,
    ttl: Duration,
}

impl<R> TtlSlot<R> {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if one is held and `now` is before its expiry.
    pub fn get(&self, now: Instant) -> Option<&R> {
        self.entry
            .as_ref()
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| &entry.value)
    }

    /// Replace the held value; it expires at `now + ttl`, or never if that
    /// instant is not representable.
    pub fn set(&mut self, value: R, now: Instant) -> &R {
        let entry = self.entry.insert(CacheEntry {
            value,
            expiry: now.checked_add(self.ttl),
        });
        &entry.value
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

/// A function wrapped with a [`TtlSlot`].
///
/// Arguments are not part of the cache key: while the slot is fresh every
/// call returns the cached value whatever it is called with. Functions of
/// several arguments take a tuple.
///
/// Calls need `&mut self`, so sharing one instance between threads requires
/// the caller's own lock. Two callers that both find the slot empty will
/// both run the function.
pub struct Memoized<F, R> {
    func: F,
    slot: TtlSlot<R>,
}

impl<F, R: Clone> Memoized<F, R> {
    pub fn new(func: F, ttl: Duration) -> Self {
        Self {
            func,
            slot: TtlSlot::new(ttl),
        }
    }

    pub fn call<A>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let now = Instant::now();
        if let Some(value) = self.slot.get(now) {
            tracing::trace!("Memoized cache hit");
            return value.clone();
        }
        tracing::trace!(ttl_ms = self.slot.ttl().as_millis() as u64, "Memoized cache miss");
        let value = (self.func)(args);
        self.slot.set(value, now).clone()
    }

    /// Like [`call`](Self::call) for fallible functions: only `Ok` values are
    /// cached, and an `Err` leaves the slot untouched.
    pub fn try_call<A, E>(&mut self, args: A) -> Result<R, E>
    where
        F: FnMut(A) -> Result<R, E>,
    {
        let now = Instant::now();
        if let Some(value) = self.slot.get(now) {
            tracing::trace!("Memoized cache hit");
            return Ok(value.clone());
        }
        let value = (self.func)(args)?;
        Ok(self.slot.set(value, now).clone())
    }

    /// Whether the next call would be served from the cache.
    pub fn is_fresh(&self) -> bool {
        self.slot.get(Instant::now()).is_some()
    }

    pub fn invalidate(&mut self) {
        self.slot.clear();
    }

    /// Turn the wrapper back into a plain closure with `func`'s signature.
    pub fn into_fn<A>(mut self) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        move |args| self.call(args)
    }
}

/// Cache `func`'s most recent result for `ttl`.
pub fn memoize_with_ttl<F, R: Clone>(func: F, ttl: Duration) -> Memoized<F, R> {
    Memoized::new(func, ttl)
}

/// Cache `func`'s first result forever.
pub fn memoize<F, R: Clone>(func: F) -> Memoized<F, R> {
    memoize_with_ttl(func, Duration::MAX)
}
