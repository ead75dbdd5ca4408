//! PreferenceReconciler - merges installed apps with persisted preferences
//!
//! Produces the ordered app list every screen renders from, and the
//! preference writes needed to give newly seen apps a stable position.
//!
//! Ordering contract: ascending `order_index`, then case-insensitive name.
//! Apps without a position are appended after the highest persisted index,
//! in name order.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{AppPreference, AppViewItem, InstalledApp, UNASSIGNED_ORDER};
use crate::domain::value_objects::{MoveDirection, OrphanPolicy};

/// Result of one reconciliation pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconciliation {
    /// Every app, fully ordered (hidden ones included)
    pub items: Vec<AppViewItem>,
    /// Preferences whose order index must be persisted
    pub writes: Vec<AppPreference>,
}

impl Reconciliation {
    /// Items the user has not hidden, in order
    pub fn visible(&self) -> Vec<AppViewItem> {
        self.items.iter().filter(|i| i.is_visible).cloned().collect()
    }

    /// Visible favorites, in order
    pub fn favorites(&self) -> Vec<AppViewItem> {
        self.items
            .iter()
            .filter(|i| i.is_visible && i.is_favorite)
            .cloned()
            .collect()
    }

    pub fn needs_writes(&self) -> bool {
        !self.writes.is_empty()
    }
}

/// Stateless reconciliation service
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceReconciler {
    orphan_policy: OrphanPolicy,
}

impl PreferenceReconciler {
    pub fn new(orphan_policy: OrphanPolicy) -> Self {
        Self { orphan_policy }
    }

    pub fn orphan_policy(&self) -> OrphanPolicy {
        self.orphan_policy
    }

    /// Merge `apps` with `preferences` into an ordered list.
    ///
    /// Deterministic for identical inputs. Once the returned writes are
    /// persisted, reconciling again yields the same items and no writes.
    pub fn reconcile(&self, apps: &[InstalledApp], preferences: &[AppPreference]) -> Reconciliation {
        let by_package: HashMap<&str, &AppPreference> = preferences
            .iter()
            .map(|p| (p.package_id.as_str(), p))
            .collect();

        let mut seen: HashSet<&str> = HashSet::with_capacity(apps.len());
        let mut items: Vec<AppViewItem> = apps
            .iter()
            .filter(|app| seen.insert(app.package_id.as_str()))
            .map(|app| AppViewItem::from_app(app, by_package.get(app.package_id.as_str()).copied()))
            .collect();

        if self.orphan_policy == OrphanPolicy::Placeholder {
            let orphans: Vec<AppViewItem> = preferences
                .iter()
                .filter(|p| !seen.contains(p.package_id.as_str()))
                .map(AppViewItem::from_preference_only)
                .collect();
            items.extend(orphans);
        }

        sort_items(&mut items);

        let mut next = Some(next_order_index(preferences));
        for item in items.iter_mut().filter(|i| i.order_index == UNASSIGNED_ORDER) {
            // Positions ran out; the item keeps sorting last
            let Some(index) = next.filter(|n| *n != UNASSIGNED_ORDER) else {
                break;
            };
            item.order_index = index;
            next = index.checked_add(1);
        }

        sort_items(&mut items);

        let writes = items
            .iter()
            .filter(|item| {
                let persisted = by_package
                    .get(item.package_id.as_str())
                    .map_or(UNASSIGNED_ORDER, |p| p.order_index);
                persisted != item.order_index
            })
            .map(AppViewItem::to_preference)
            .collect();

        Reconciliation { items, writes }
    }
}

/// Next free order index: one past the highest assigned index, or 0
pub fn next_order_index(preferences: &[AppPreference]) -> i32 {
    preferences
        .iter()
        .filter(|p| p.is_assigned())
        .map(|p| p.order_index)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Plan moving `package_id` one step in `direction` within `items`.
///
/// Returns the complete list renumbered `0..n` after swapping the item with
/// its neighbor, or `None` when the package is absent or already at the edge.
pub fn plan_move(
    items: &[AppViewItem],
    package_id: &str,
    direction: MoveDirection,
) -> Option<Vec<AppPreference>> {
    let position = items.iter().position(|i| i.package_id == package_id)?;
    let target = position.checked_add_signed(direction.offset())?;
    if target >= items.len() {
        return None;
    }

    let mut reordered: Vec<&AppViewItem> = items.iter().collect();
    reordered.swap(position, target);

    Some(
        reordered
            .into_iter()
            .zip(0..)
            .map(|(item, index)| item.to_preference().with_order(index))
            .collect(),
    )
}

fn sort_items(items: &mut [AppViewItem]) {
    items.sort_by_cached_key(|item| (item.order_index, item.sort_name(), item.package_id.clone()));
}
