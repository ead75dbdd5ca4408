//! AppActionsController - turns menu selections and package broadcasts into work
//!
//! Platform actions (open, info, uninstall) run right away so their errors
//! can be shown. Preference edits and refreshes are fire-and-forget jobs on
//! the task executor; failures there are logged.
//!
//! Every action is checked against the menu the app would show in the given
//! context, so locked apps stay locked whoever the caller is.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::adapters::presenters::{permits, MenuAction, MenuContext};
use crate::application::ports::TaskExecutor;
use crate::application::services::AppList;
use crate::application::use_cases::{LaunchAppUseCase, LaunchError, MoveAppUseCase, UpdatePreferenceUseCase};
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository, SettingsRepository};
use crate::shared::observable::Observable;

pub type DynLaunchApp = LaunchAppUseCase<dyn InstalledAppRepository>;
pub type DynUpdatePreference = UpdatePreferenceUseCase<dyn InstalledAppRepository, dyn PreferenceRepository>;
pub type DynMoveApp = MoveAppUseCase<dyn InstalledAppRepository, dyn PreferenceRepository>;

/// Error for dispatched actions
#[derive(Error, Debug)]
pub enum ActionError {
    /// Package is not in the app list
    #[error("Application not found: {0}")]
    NotFound(String),
    /// The menu for this app does not offer the action
    #[error("{action:?} is not available for {package}")]
    NotAllowed { action: MenuAction, package: String },
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// Package manager broadcast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageEvent {
    Added,
    Removed,
    Replaced,
}

/// PIN gate for locked apps and the settings screen.
/// Without a configured PIN the session is always unlocked.
pub struct LockSession {
    settings: Arc<dyn SettingsRepository>,
    unlocked: AtomicBool,
}

impl LockSession {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self {
            settings,
            unlocked: AtomicBool::new(false),
        }
    }

    /// Try to unlock; returns whether the session is now unlocked
    pub fn unlock(&self, pin: &str) -> bool {
        let ok = match self.settings.current().pin {
            Some(expected) => expected == pin.trim(),
            None => true,
        };
        if ok {
            self.unlocked.store(true, Ordering::SeqCst);
        } else {
            log::warn!("Rejected PIN unlock attempt");
        }
        ok
    }

    pub fn lock(&self) {
        self.unlocked.store(false, Ordering::SeqCst);
    }

    pub fn is_unlocked(&self) -> bool {
        !self.settings.current().has_pin() || self.unlocked.load(Ordering::SeqCst)
    }
}

pub struct AppActionsController {
    apps: Arc<dyn InstalledAppRepository>,
    list: Observable<AppList>,
    launch: Arc<DynLaunchApp>,
    update: Arc<DynUpdatePreference>,
    mover: Arc<DynMoveApp>,
    executor: Arc<dyn TaskExecutor>,
    session: LockSession,
}

impl AppActionsController {
    pub fn new(
        apps: Arc<dyn InstalledAppRepository>,
        list: Observable<AppList>,
        launch: Arc<DynLaunchApp>,
        update: Arc<DynUpdatePreference>,
        mover: Arc<DynMoveApp>,
        executor: Arc<dyn TaskExecutor>,
        session: LockSession,
    ) -> Self {
        Self {
            apps,
            list,
            launch,
            update,
            mover,
            executor,
            session,
        }
    }

    pub fn session(&self) -> &LockSession {
        &self.session
    }

    /// Perform `action` on `package_id`, as picked from the menu shown in `context`
    pub fn dispatch(&self, action: MenuAction, package_id: &str, context: MenuContext) -> Result<(), ActionError> {
        let item = self
            .list
            .get()
            .get(package_id)
            .cloned()
            .ok_or_else(|| ActionError::NotFound(package_id.to_string()))?;
        if !permits(&item, action, context, self.session.is_unlocked()) {
            log::warn!("Refused {:?} on {} from {:?}", action, package_id, context);
            return Err(ActionError::NotAllowed {
                action,
                package: package_id.to_string(),
            });
        }

        match action {
            MenuAction::Open => return Ok(self.launch.launch(package_id)?),
            MenuAction::Info => return Ok(self.launch.show_info(package_id)?),
            MenuAction::Uninstall => return Ok(self.launch.uninstall(package_id)?),
            _ => {}
        }

        let package = package_id.to_string();
        if let Some(change) = action.preference_change() {
            let update = Arc::clone(&self.update);
            self.executor.submit(
                "update-preference",
                Box::new(move || {
                    if let Err(e) = update.execute(&package, change) {
                        log::warn!("Failed to update {}: {}", package, e);
                    }
                }),
            );
        } else if let Some(direction) = action.move_direction() {
            let mover = Arc::clone(&self.mover);
            self.executor.submit(
                "move-app",
                Box::new(move || match mover.execute(&package, direction) {
                    Ok(true) => {}
                    Ok(false) => log::debug!("{} is already at the edge", package),
                    Err(e) => log::warn!("Failed to move {}: {}", package, e),
                }),
            );
        }
        Ok(())
    }

    /// React to an install, removal or update of a package
    pub fn on_package_event(&self, event: PackageEvent, package_id: &str) {
        log::info!("Package {:?}: {}", event, package_id);
        let apps = Arc::clone(&self.apps);
        self.executor.submit(
            "refresh-installed-apps",
            Box::new(move || {
                if let Err(e) = apps.refresh() {
                    log::warn!("Failed to refresh installed apps: {}", e);
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::{FilePreferenceGateway, PackageAppGateway, TomlSettingsGateway};
    use crate::application::ports::platform_port::NullPlatform;
    use crate::application::ports::ManualExecutor;
    use crate::application::services::{AppListService, MutationLock};
    use crate::domain::entities::{AppPreference, InstalledApp, LauncherSettings};
    use crate::domain::repositories::settings_repository::NullSettingsRepository;
    use crate::domain::services::PreferenceReconciler;
    use crate::infrastructure::manifest_package_source::ManifestPackageSource;

    struct Fixture {
        source: Arc<ManifestPackageSource>,
        apps: Arc<PackageAppGateway<ManifestPackageSource>>,
        preferences: Arc<FilePreferenceGateway>,
        executor: Arc<ManualExecutor>,
        controller: AppActionsController,
        _service: AppListService,
    }

    fn fixture(settings: LauncherSettings) -> Fixture {
        let source = Arc::new(ManifestPackageSource::from_apps(vec![
            InstalledApp::new("A", "a"),
            InstalledApp::new("B", "b"),
        ]));
        let apps = Arc::new(PackageAppGateway::new(Arc::clone(&source)));
        apps.refresh().unwrap();
        let preferences = Arc::new(FilePreferenceGateway::in_memory());
        let executor = Arc::new(ManualExecutor::new());
        let lock = MutationLock::new();

        let dyn_apps: Arc<dyn InstalledAppRepository> = apps.clone();
        let dyn_prefs: Arc<dyn PreferenceRepository> = preferences.clone();
        let service = AppListService::new(
            Arc::clone(&dyn_apps),
            Arc::clone(&dyn_prefs),
            Arc::new(ManualExecutor::new()),
            lock.clone(),
            PreferenceReconciler::default(),
        );
        let controller = AppActionsController::new(
            Arc::clone(&dyn_apps),
            service.list(),
            Arc::new(LaunchAppUseCase::new(
                Arc::clone(&dyn_apps),
                Arc::new(NullPlatform),
                Arc::new(NullPlatform),
                Arc::new(NullPlatform),
            )),
            Arc::new(UpdatePreferenceUseCase::new(
                Arc::clone(&dyn_apps),
                Arc::clone(&dyn_prefs),
                lock.clone(),
                PreferenceReconciler::default(),
            )),
            Arc::new(MoveAppUseCase::new(dyn_apps, dyn_prefs, lock, PreferenceReconciler::default())),
            executor.clone(),
            LockSession::new(Arc::new(TomlSettingsGateway::in_memory(settings))),
        );

        Fixture {
            source,
            apps,
            preferences,
            executor,
            controller,
            _service: service,
        }
    }

    #[test]
    fn test_preference_actions_are_queued() {
        let f = fixture(LauncherSettings::default());

        f.controller.dispatch(MenuAction::AddFavorite, "b", MenuContext::Home).unwrap();
        f.controller.dispatch(MenuAction::Hide, "a", MenuContext::AllApps).unwrap();
        assert_eq!(f.executor.pending(), 2);
        assert!(f.preferences.get("b").unwrap().is_none());

        f.executor.run_pending();
        assert!(f.preferences.get("b").unwrap().unwrap().is_favorite);
        assert!(!f.preferences.get("a").unwrap().unwrap().is_visible);
    }

    #[test]
    fn test_move_action_renumbers() {
        let f = fixture(LauncherSettings::default());

        f.controller.dispatch(MenuAction::MoveEarlier, "b", MenuContext::Home).unwrap();
        f.executor.run_pending();

        let order: Vec<String> = f
            .preferences
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.package_id)
            .collect();
        assert_eq!(order, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_platform_actions_run_immediately() {
        let f = fixture(LauncherSettings::default());

        f.controller.dispatch(MenuAction::Open, "a", MenuContext::Home).unwrap();
        f.controller.dispatch(MenuAction::Uninstall, "b", MenuContext::AllApps).unwrap();
        assert!(matches!(
            f.controller.dispatch(MenuAction::Uninstall, "missing", MenuContext::AllApps),
            Err(ActionError::NotFound(_))
        ));
        assert_eq!(f.executor.pending(), 0);
    }

    #[test]
    fn test_package_event_refreshes() {
        let f = fixture(LauncherSettings::default());

        f.source.install(InstalledApp::new("C", "c"));
        f.controller.on_package_event(PackageEvent::Added, "c");
        assert!(!f.apps.is_installed("c"));

        f.executor.run_pending();
        assert!(f.apps.is_installed("c"));
    }

    #[test]
    fn test_lock_session() {
        let open = LockSession::new(Arc::new(NullSettingsRepository::new()));
        assert!(open.is_unlocked());
        assert!(open.unlock("anything"));

        let settings = LauncherSettings {
            pin: Some("1234".to_string()),
            ..LauncherSettings::default()
        };
        let f = fixture(settings);
        let session = f.controller.session();

        assert!(!session.is_unlocked());
        assert!(!session.unlock("0000"));
        assert!(session.unlock("1234"));
        assert!(session.is_unlocked());
        session.lock();
        assert!(!session.is_unlocked());
    }

    #[test]
    fn test_locked_app_actions_need_unlocked_session() {
        let f = fixture(LauncherSettings {
            pin: Some("1234".to_string()),
            ..LauncherSettings::default()
        });
        f.preferences
            .upsert(AppPreference::new("a").with_order(0).with_locked(true))
            .unwrap();

        for (action, context) in [
            (MenuAction::Unlock, MenuContext::Settings),
            (MenuAction::Hide, MenuContext::AllApps),
            (MenuAction::AddFavorite, MenuContext::Home),
            (MenuAction::Uninstall, MenuContext::AllApps),
        ] {
            assert!(matches!(
                f.controller.dispatch(action, "a", context),
                Err(ActionError::NotAllowed { .. })
            ));
        }
        // Unlocked apps are still fair game outside the settings screen
        f.controller.dispatch(MenuAction::Hide, "b", MenuContext::AllApps).unwrap();
        f.controller.dispatch(MenuAction::Open, "a", MenuContext::Home).unwrap();
        assert_eq!(f.executor.pending(), 1);

        assert!(f.controller.session().unlock("1234"));
        f.controller.dispatch(MenuAction::Unlock, "a", MenuContext::Settings).unwrap();
        f.executor.run_pending();
        assert!(!f.preferences.get("a").unwrap().unwrap().is_locked);
        assert!(!f.preferences.get("b").unwrap().unwrap().is_visible);
    }
}
