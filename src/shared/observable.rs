//! Observable values and the `combine_latest` combinator
//!
//! An [`Observable`] holds a current value and notifies subscribers whenever
//! it changes. Emissions on one observable are serialized, and subscribers
//! receive the current value immediately on subscription.
//!
//! A subscriber must not set or subscribe to the observable that is
//! notifying it; emissions are not re-entrant.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
    /// Serializes emissions and subscriptions
    emit: Mutex<()>,
}

/// A shared, observable value
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Non-owning handle to an [`Observable`]
pub struct WeakObservable<T> {
    inner: Weak<Inner<T>>,
}

impl<T> WeakObservable<T> {
    pub fn upgrade(&self) -> Option<Observable<T>> {
        self.inner.upgrade().map(|inner| Observable { inner })
    }
}

/// Keeps a subscription alive; unsubscribes when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Unsubscribe now
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                emit: Mutex::new(()),
            }),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Replace the value, notifying subscribers if it changed.
    /// Returns whether an emission happened.
    pub fn set(&self, value: T) -> bool {
        let _emit = self.inner.emit.lock();
        self.replace_locked(value)
    }

    /// Modify the value in place, notifying subscribers if it changed
    pub fn update(&self, modify: impl FnOnce(&mut T)) -> bool {
        let _emit = self.inner.emit.lock();
        let mut value = self.get();
        modify(&mut value);
        self.replace_locked(value)
    }

    /// Register `callback`; it is called with the current value right away
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let _emit = self.inner.emit.lock();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback<T> = Arc::new(callback);

        callback(&self.get());
        self.inner.subscribers.lock().push((id, callback));

        let weak = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.lock().retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    pub fn downgrade(&self) -> WeakObservable<T> {
        WeakObservable {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn replace_locked(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }

        let subscribers: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in subscribers {
            callback(&value);
        }
        true
    }
}

impl<T> std::fmt::Debug for Observable<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.read())
            .finish()
    }
}

/// Output of [`combine_latest`]; recomputation stops when this is dropped
pub struct Combined<R> {
    output: Observable<R>,
    _subscriptions: [Subscription; 2],
}

impl<R> Combined<R>
where
    R: Clone + PartialEq + Send + Sync + 'static,
{
    /// The derived observable
    pub fn output(&self) -> &Observable<R> {
        &self.output
    }

    pub fn get(&self) -> R {
        self.output.get()
    }
}

/// Derive an observable from the latest values of `a` and `b`.
///
/// `combine` reruns whenever either source changes and always sees both
/// sources' current values, so consumers never observe a result computed
/// from a half-applied update. Recomputations are serialized.
pub fn combine_latest<A, B, R, F>(a: &Observable<A>, b: &Observable<B>, combine: F) -> Combined<R>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    B: Clone + PartialEq + Send + Sync + 'static,
    R: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&A, &B) -> R + Send + Sync + 'static,
{
    let output = Observable::new(combine(&a.get(), &b.get()));

    let weak_a = a.downgrade();
    let weak_b = b.downgrade();
    let target = output.clone();
    let guard = Mutex::new(());
    let recompute = Arc::new(move || {
        let _serial = guard.lock();
        if let (Some(a), Some(b)) = (weak_a.upgrade(), weak_b.upgrade()) {
            target.set(combine(&a.get(), &b.get()));
        }
    });

    let on_a = Arc::clone(&recompute);
    let sub_a = a.subscribe(move |_| on_a());
    let on_b = recompute;
    let sub_b = b.subscribe(move |_| on_b());

    Combined {
        output,
        _subscriptions: [sub_a, sub_b],
    }
}
