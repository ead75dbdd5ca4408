//! CompositionRoot - Dependency Injection Container
//!
//! This module wires together all the dependencies for the launcher.
//! It creates and owns all the major components.

use std::sync::Arc;

use crate::adapters::controllers::app_actions_controller::{DynLaunchApp, DynMoveApp, DynUpdatePreference};
use crate::adapters::controllers::{AppActionsController, LockSession};
use crate::adapters::gateways::{FilePreferenceGateway, PackageAppGateway, TomlSettingsGateway};
use crate::adapters::presenters::{AppSettingsPresenter, HomePresenter};
use crate::application::ports::TaskExecutor;
use crate::application::services::{AppListService, MutationLock};
use crate::application::use_cases::{
    LaunchAppUseCase, MoveAppUseCase, PurgeOrphansUseCase, SelectWallpaperUseCase, UpdatePreferenceUseCase,
};
use crate::domain::entities::LauncherSettings;
use crate::domain::repositories::{InstalledAppRepository, PreferenceRepository, SettingsRepository};
use crate::domain::services::PreferenceReconciler;
use crate::infrastructure::desktop_platform::DesktopPlatform;
use crate::infrastructure::manifest_package_source::ManifestPackageSource;
use crate::infrastructure::worker_pool::WorkerPool;
use crate::shared::config::Config;

/// Launcher composition root - owns all dependencies
pub struct CompositionRoot {
    pub config: Config,

    // Infrastructure
    pub executor: Arc<WorkerPool>,
    pub package_source: Arc<ManifestPackageSource>,

    // Repositories
    pub apps: Arc<dyn InstalledAppRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
    pub settings: Arc<dyn SettingsRepository>,

    // Application services and use cases
    pub app_list: AppListService,
    pub update_preference: Arc<DynUpdatePreference>,
    pub move_app: Arc<DynMoveApp>,
    pub launch_app: Arc<DynLaunchApp>,
    pub purge_orphans: PurgeOrphansUseCase<dyn InstalledAppRepository, dyn PreferenceRepository>,
    pub select_wallpaper: SelectWallpaperUseCase<dyn SettingsRepository>,

    // Presenters
    pub home_presenter: HomePresenter,
    pub settings_presenter: AppSettingsPresenter,

    // Controllers
    pub actions: AppActionsController,
}

impl CompositionRoot {
    /// Wire everything from `config`.
    ///
    /// Unreadable stores are replaced by in-memory ones so the launcher still
    /// comes up; the problem is logged.
    pub fn new(config: Config) -> Self {
        let executor = Arc::new(WorkerPool::start(config.workers.threads));
        let lock = MutationLock::new();
        let reconciler = PreferenceReconciler::new(config.reconciler.orphan_policy);

        // Gateways
        let package_source = Arc::new(load_package_source(&config));
        let apps: Arc<dyn InstalledAppRepository> =
            Arc::new(PackageAppGateway::new(Arc::clone(&package_source)));
        let preferences = open_preferences(&config);
        let settings = open_settings(&config);

        // Services and use cases
        let task_executor: Arc<dyn TaskExecutor> = executor.clone();
        let app_list = AppListService::new(
            Arc::clone(&apps),
            Arc::clone(&preferences),
            Arc::clone(&task_executor),
            lock.clone(),
            reconciler,
        );

        let platform = Arc::new(DesktopPlatform::new(Arc::clone(&apps)));
        let launch_app = Arc::new(LaunchAppUseCase::new(
            Arc::clone(&apps),
            platform.clone(),
            platform.clone(),
            platform,
        ));
        let update_preference = Arc::new(UpdatePreferenceUseCase::new(
            Arc::clone(&apps),
            Arc::clone(&preferences),
            lock.clone(),
            reconciler,
        ));
        let move_app = Arc::new(MoveAppUseCase::new(
            Arc::clone(&apps),
            Arc::clone(&preferences),
            lock.clone(),
            reconciler,
        ));
        let purge_orphans = PurgeOrphansUseCase::new(Arc::clone(&apps), Arc::clone(&preferences), lock);
        let select_wallpaper = SelectWallpaperUseCase::new(Arc::clone(&settings));

        // Presenters
        let list = app_list.list();
        let home_presenter = HomePresenter::new(&list, &settings.observe());
        let settings_presenter = AppSettingsPresenter::new(&list);

        // Controllers
        let actions = AppActionsController::new(
            Arc::clone(&apps),
            list.clone(),
            Arc::clone(&launch_app),
            Arc::clone(&update_preference),
            Arc::clone(&move_app),
            task_executor,
            LockSession::new(Arc::clone(&settings)),
        );

        Self {
            config,
            executor,
            package_source,
            apps,
            preferences,
            settings,
            app_list,
            update_preference,
            move_app,
            launch_app,
            purge_orphans,
            select_wallpaper,
            home_presenter,
            settings_presenter,
            actions,
        }
    }

    /// Run queued background work and stop the workers
    pub fn shutdown(&self) {
        self.executor.shutdown();
    }
}

fn load_package_source(config: &Config) -> ManifestPackageSource {
    let Some(path) = config.apps.manifest.as_ref() else {
        log::warn!("No app manifest configured; the app list will be empty");
        return ManifestPackageSource::from_apps(Vec::new());
    };
    ManifestPackageSource::load(path).unwrap_or_else(|e| {
        log::error!("Failed to load app manifest {}: {}", path.display(), e);
        ManifestPackageSource::from_apps(Vec::new())
    })
}

fn open_preferences(config: &Config) -> Arc<dyn PreferenceRepository> {
    let path = config.storage.preferences_path();
    match FilePreferenceGateway::open(path.clone()) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            log::error!("Failed to open {}: {}; preferences will not be saved", path.display(), e);
            Arc::new(FilePreferenceGateway::in_memory())
        }
    }
}

fn open_settings(config: &Config) -> Arc<dyn SettingsRepository> {
    let path = config.storage.settings_path();
    match TomlSettingsGateway::open(path.clone()) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            log::error!("Failed to open {}: {}; settings will not be saved", path.display(), e);
            Arc::new(TomlSettingsGateway::in_memory(LauncherSettings::default()))
        }
    }
}
