#![forbid(unsafe_code)]

//! Memoized component wrapper with manual invalidation and optional memo keys.
//!
//! A [`Memo`] renders its inner component into a private frame once and then
//! replays that frame (markup and triggers) for as long as the memo key stays
//! the same. Replaying clones `Rc` handles; it does not call the inner
//! component.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use picklist_core::Frame;

use crate::{Component, StatefulComponent};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Memo key strategy for a component.
pub trait MemoKey<C> {
    /// Return a memo key for the component, or `None` to disable key-based invalidation.
    fn memo_key(&self, component: &C) -> Option<u64>;
}

/// No memo key: invalidation is manual only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMemoKey;

impl<C> MemoKey<C> for NoMemoKey {
    fn memo_key(&self, _component: &C) -> Option<u64> {
        None
    }
}

/// Hash-based memo key using `std::hash::Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashKey;

impl<C: Hash> MemoKey<C> for HashKey {
    fn memo_key(&self, component: &C) -> Option<u64> {
        Some(hash_value(component))
    }
}

/// Custom key function wrapper.
#[derive(Debug, Clone, Copy)]
pub struct FnKey<F>(pub F);

impl<C, F: Fn(&C) -> u64> MemoKey<C> for FnKey<F> {
    fn memo_key(&self, component: &C) -> Option<u64> {
        Some((self.0)(component))
    }
}

/// Memoized component wrapper.
///
/// Use with [`MemoState`] via the [`StatefulComponent`] trait.
#[derive(Debug)]
pub struct Memo<C, K = NoMemoKey> {
    inner: C,
    key: K,
}

/// Render counters for a memoized component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Times the inner component actually rendered.
    pub renders: u64,
    /// Times the cached output was replayed instead.
    pub hits: u64,
}

impl std::ops::Add for MemoStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            renders: self.renders + rhs.renders,
            hits: self.hits + rhs.hits,
        }
    }
}

/// State for a memoized component.
pub struct MemoState<M> {
    cache: Option<Frame<M>>,
    dirty: bool,
    last_key: Option<u64>,
    stats: MemoStats,
}

impl<M> Default for MemoState<M> {
    fn default() -> Self {
        Self {
            cache: None,
            dirty: false,
            last_key: None,
            stats: MemoStats::default(),
        }
    }
}

impl<M> std::fmt::Debug for MemoState<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoState")
            .field("cached", &self.cache.is_some())
            .field("dirty", &self.dirty)
            .field("last_key", &self.last_key)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy)]
enum MemoMissReason {
    Empty,
    Dirty,
    KeyChanged,
}

impl<C> Memo<C, NoMemoKey> {
    /// Create a memoized component with manual invalidation.
    pub fn new(component: C) -> Self {
        Self {
            inner: component,
            key: NoMemoKey,
        }
    }
}

impl<C: Hash> Memo<C, HashKey> {
    /// Create a memoized component keyed on its `Hash`.
    pub fn with_hash(component: C) -> Self {
        Self {
            inner: component,
            key: HashKey,
        }
    }
}

impl<C, F: Fn(&C) -> u64> Memo<C, FnKey<F>> {
    /// Create a memoized component with a custom key function.
    pub fn with_key(component: C, key_fn: F) -> Self {
        Self {
            inner: component,
            key: FnKey(key_fn),
        }
    }
}

impl<M> MemoState<M> {
    /// Create a new empty memo state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a re-render on the next draw.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Drop the cached output.
    pub fn clear(&mut self) {
        self.cache = None;
        self.last_key = None;
    }

    /// Whether output is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Render counters.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

impl<M: 'static, C: Component<M>, K: MemoKey<C>> StatefulComponent<M> for Memo<C, K> {
    type State = MemoState<M>;

    fn render(&self, frame: &mut Frame<M>, state: &mut MemoState<M>) {
        let key = self.key.memo_key(&self.inner);
        let key_changed = key != state.last_key;
        let needs_render = state.cache.is_none() || state.dirty || key_changed;

        #[cfg(feature = "tracing")]
        let reason = if state.cache.is_none() {
            MemoMissReason::Empty
        } else if state.dirty {
            MemoMissReason::Dirty
        } else {
            MemoMissReason::KeyChanged
        };

        if needs_render {
            let mut cache_frame = Frame::new();
            self.inner.render(&mut cache_frame);
            state.cache = Some(cache_frame);
            state.dirty = false;
            state.last_key = key;
            state.stats.renders += 1;

            #[cfg(feature = "tracing")]
            debug!(
                component = std::any::type_name::<C>(),
                reason = ?reason,
                "Memo miss, re-rendering"
            );
        } else {
            state.stats.hits += 1;

            #[cfg(feature = "tracing")]
            trace!(
                component = std::any::type_name::<C>(),
                "Memo hit, replaying cached frame"
            );
        }

        if let Some(cache) = &state.cache {
            frame.append(cache);
        }
    }
}

fn hash_value<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
