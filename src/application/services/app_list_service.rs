//! AppListService - the live, reconciled app list
//!
//! Subscribes to installed apps and stored preferences, reconciles on every
//! change of either and publishes the ordered result. Order indices the
//! reconciler assigns are persisted in the background; the store's next
//! emission then reconciles to the same list without further writes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::ports::TaskExecutor;
use crate::application::services::mutation_lock::MutationLock;
use crate::domain::entities::AppViewItem;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository};
use crate::domain::services::{PreferenceReconciler, Reconciliation};
use crate::shared::observable::{combine_latest, Combined, Observable, Subscription};

/// The reconciled list as screens consume it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppList {
    /// False until installed apps have been loaded once
    pub loaded: bool,
    /// All apps in display order, hidden ones included
    pub items: Vec<AppViewItem>,
}

impl AppList {
    pub fn visible(&self) -> Vec<AppViewItem> {
        self.items.iter().filter(|i| i.is_visible).cloned().collect()
    }

    pub fn favorites(&self) -> Vec<AppViewItem> {
        self.items
            .iter()
            .filter(|i| i.is_visible && i.is_favorite)
            .cloned()
            .collect()
    }

    pub fn get(&self, package_id: &str) -> Option<&AppViewItem> {
        self.items.iter().find(|i| i.package_id == package_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Snapshot {
    loaded: bool,
    reconciliation: Reconciliation,
}

/// Reconcile the repositories' current contents
pub fn reconcile_stored<A, P>(
    reconciler: &PreferenceReconciler,
    apps: &A,
    preferences: &P,
) -> Result<Reconciliation, DomainError>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    Ok(reconciler.reconcile(&apps.snapshot(), &preferences.get_all()?))
}

/// Live reconciliation of installed apps and preferences
pub struct AppListService {
    list: Observable<AppList>,
    reconciler: PreferenceReconciler,
    _combined: Combined<Snapshot>,
    _writer: Subscription,
}

impl AppListService {
    pub fn new<A, P>(
        apps: Arc<A>,
        preferences: Arc<P>,
        executor: Arc<dyn TaskExecutor>,
        lock: MutationLock,
        reconciler: PreferenceReconciler,
    ) -> Self
    where
        A: InstalledAppRepository + ?Sized + 'static,
        P: PreferenceRepository + ?Sized + 'static,
    {
        let combined = combine_latest(&apps.apps(), &preferences.observe(), move |installed, prefs| {
            Snapshot {
                loaded: installed.is_some(),
                reconciliation: reconciler.reconcile(installed.as_deref().unwrap_or(&[]), prefs),
            }
        });

        let list = Observable::new(AppList::default());
        let scheduled = Arc::new(AtomicBool::new(false));

        let writer = {
            let list = list.clone();
            combined.output().subscribe(move |snapshot: &Snapshot| {
                list.set(AppList {
                    loaded: snapshot.loaded,
                    items: snapshot.reconciliation.items.clone(),
                });

                if !snapshot.loaded || !snapshot.reconciliation.needs_writes() {
                    return;
                }
                // One pending job covers any number of emissions
                if scheduled.swap(true, Ordering::SeqCst) {
                    return;
                }

                let apps = Arc::clone(&apps);
                let preferences = Arc::clone(&preferences);
                let lock = lock.clone();
                let scheduled = Arc::clone(&scheduled);
                executor.submit(
                    "persist-order-indices",
                    Box::new(move || {
                        scheduled.store(false, Ordering::SeqCst);
                        if let Err(e) =
                            persist_assignments(&reconciler, &*apps, &*preferences, &lock)
                        {
                            log::warn!("Failed to persist order indices: {}", e);
                        }
                    }),
                );
            })
        };

        Self {
            list,
            reconciler,
            _combined: combined,
            _writer: writer,
        }
    }

    /// Live reconciled list
    pub fn list(&self) -> Observable<AppList> {
        self.list.clone()
    }

    pub fn current(&self) -> AppList {
        self.list.get()
    }

    pub fn reconciler(&self) -> PreferenceReconciler {
        self.reconciler
    }
}

/// Re-reconcile against fresh store contents and persist what is missing.
/// Working from fresh data keeps a stale snapshot from undoing a move.
fn persist_assignments<A, P>(
    reconciler: &PreferenceReconciler,
    apps: &A,
    preferences: &P,
    lock: &MutationLock,
) -> Result<(), DomainError>
where
    A: InstalledAppRepository + ?Sized,
    P: PreferenceRepository + ?Sized,
{
    let _guard = lock.lock();
    let fresh = reconcile_stored(reconciler, apps, preferences)?;
    if fresh.needs_writes() {
        log::debug!("Persisting {} order indices", fresh.writes.len());
        preferences.upsert_many(fresh.writes)?;
    }
    Ok(())
}
