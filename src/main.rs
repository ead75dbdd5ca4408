//! Nisi - command-line front end for the launcher core
//!
//! Loads installed apps from the configured manifest, reconciles them with
//! stored preferences and prints or edits the result.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nisi::adapters::controllers::ActionError;
use nisi::adapters::presenters::{MenuAction, MenuContext};
use nisi::domain::entities::{AppViewItem, WallpaperItem};
use nisi::domain::value_objects::MoveDirection;
use nisi::infrastructure::CompositionRoot;
use nisi::shared::config::Config;

#[derive(Parser)]
#[command(name = "nisi")]
#[command(about = "Home-screen launcher: app order, visibility and favorites")]
struct Cli {
    /// Path to nisi.toml (defaults to the standard locations)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// PIN for locked apps and app settings
    #[arg(long)]
    pin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every app, hidden ones included
    List,

    /// Show the home screen rows
    Home,

    /// List favorite apps
    Favorites,

    /// Show or change launcher settings
    Settings {
        /// Weather location
        #[arg(long)]
        location: Option<String>,
        /// Custom weather API key (empty to remove)
        #[arg(long)]
        api_key: Option<String>,
        /// New PIN (empty to remove)
        #[arg(long)]
        set_pin: Option<String>,
    },

    /// Add an app to favorites
    Fav { package: String },

    /// Remove an app from favorites
    Unfav { package: String },

    /// Hide an app
    Hide { package: String },

    /// Show a hidden app
    Show { package: String },

    /// Lock an app behind the PIN
    Lock { package: String },

    /// Unlock an app
    Unlock { package: String },

    /// Move an app one position
    Move {
        package: String,
        /// earlier|later (also left/right, up/down)
        direction: MoveDirection,
    },

    /// Delete preferences of uninstalled apps
    Purge,

    /// List wallpapers or select one by identifier
    Wallpaper { identifier: Option<String> },

    /// Launch an app
    Launch { package: String },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    nisi::log::init(&config.logging.path(), nisi::log::parse_level(&config.logging.level));
    log::info!("Running {}", command_name(&cli.command));

    let root = CompositionRoot::new(config);
    let result = run(&root, cli.pin.as_deref(), cli.command);
    // Flush queued preference writes before exiting
    root.shutdown();

    match result {
        Ok(Some(report)) => report(&root),
        Ok(None) => {}
        Err(e) => {
            log::error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List => "list",
        Commands::Home => "home",
        Commands::Favorites => "favorites",
        Commands::Settings { .. } => "settings",
        Commands::Fav { .. } => "fav",
        Commands::Unfav { .. } => "unfav",
        Commands::Hide { .. } => "hide",
        Commands::Show { .. } => "show",
        Commands::Lock { .. } => "lock",
        Commands::Unlock { .. } => "unlock",
        Commands::Move { .. } => "move",
        Commands::Purge => "purge",
        Commands::Wallpaper { .. } => "wallpaper",
        Commands::Launch { .. } => "launch",
    }
}

/// Printed once background work has finished
type Report = fn(&CompositionRoot);

fn run(root: &CompositionRoot, pin: Option<&str>, command: Commands) -> Result<Option<Report>, Box<dyn Error>> {
    root.apps.refresh()?;
    if let Some(pin) = pin {
        if !root.actions.session().unlock(pin) {
            return Err("wrong PIN".into());
        }
    }

    let (action, package, context) = match command {
        Commands::List => return Ok(Some(print_all as Report)),
        Commands::Home => return Ok(Some(print_home as Report)),
        Commands::Favorites => return Ok(Some(print_favorites as Report)),
        Commands::Settings {
            location,
            api_key,
            set_pin,
        } => {
            edit_settings(root, location, api_key, set_pin)?;
            return Ok(Some(print_settings as Report));
        }
        Commands::Purge => {
            for package in root.purge_orphans.execute()? {
                println!("purged {}", package);
            }
            return Ok(None);
        }
        Commands::Wallpaper { identifier } => {
            if let Some(identifier) = identifier {
                root.select_wallpaper.select_identifier(&identifier)?;
            }
            return Ok(Some(print_wallpapers as Report));
        }
        Commands::Launch { package } => (MenuAction::Open, package, MenuContext::Home),
        Commands::Fav { package } => (MenuAction::AddFavorite, package, MenuContext::Home),
        Commands::Unfav { package } => (MenuAction::RemoveFavorite, package, MenuContext::Home),
        Commands::Hide { package } => (MenuAction::Hide, package, MenuContext::Settings),
        Commands::Show { package } => (MenuAction::Show, package, MenuContext::Settings),
        Commands::Lock { package } => (MenuAction::Lock, package, MenuContext::Settings),
        Commands::Unlock { package } => (MenuAction::Unlock, package, MenuContext::Settings),
        Commands::Move { package, direction } => {
            let action = match direction {
                MoveDirection::Earlier => MenuAction::MoveEarlier,
                MoveDirection::Later => MenuAction::MoveLater,
            };
            (action, package, MenuContext::Settings)
        }
    };

    match root.actions.dispatch(action, &package, context) {
        Err(ActionError::NotAllowed { .. }) => {
            return Err(format!("{:?} is not available for {}; try --pin", action, package).into());
        }
        result => result?,
    }
    Ok(match action {
        MenuAction::Open => None,
        _ => Some(print_all as Report),
    })
}

fn edit_settings(
    root: &CompositionRoot,
    location: Option<String>,
    api_key: Option<String>,
    set_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    if let Some(location) = location {
        root.settings.save_location(&location)?;
    }
    if let Some(api_key) = api_key {
        root.settings.save_api_key(Some(&api_key))?;
    }
    if let Some(pin) = set_pin {
        if !root.actions.session().is_unlocked() {
            return Err("changing the PIN needs --pin".into());
        }
        root.settings.save_pin(Some(&pin))?;
    }
    Ok(())
}

fn print_items(items: &[AppViewItem]) {
    for item in items {
        let mut flags = Vec::new();
        if item.is_favorite {
            flags.push("favorite");
        }
        if !item.is_visible {
            flags.push("hidden");
        }
        if item.is_locked {
            flags.push("locked");
        }
        if !item.is_installed {
            flags.push("not installed");
        }
        println!(
            "{:>4}  {:<28} {:<36} {}",
            item.order_index,
            item.name,
            item.package_id,
            flags.join(", ")
        );
    }
}

fn print_all(root: &CompositionRoot) {
    print_items(&root.settings_presenter.current().items);
}

fn print_favorites(root: &CompositionRoot) {
    print_items(&root.home_presenter.current().favorite_apps);
}

fn print_home(root: &CompositionRoot) {
    let home = root.home_presenter.current();
    println!("Wallpaper: {}", home.wallpaper_id);
    println!("\nFavorites");
    print_items(&home.favorite_apps);
    println!("\nApps");
    print_items(&home.visible_apps);
}

fn print_settings(root: &CompositionRoot) {
    let settings = root.settings.current();
    println!("location  {}", settings.location);
    println!(
        "api key   {}",
        if settings.weather_api_key.is_some() { "custom" } else { "default" }
    );
    println!("wallpaper {}", settings.wallpaper_id);
    println!("pin       {}", if settings.has_pin() { "set" } else { "not set" });
}

fn print_wallpapers(root: &CompositionRoot) {
    let selected = root.select_wallpaper.selected(&[]);
    for wallpaper in root.select_wallpaper.bundled() {
        print_wallpaper(wallpaper, wallpaper == &selected);
    }
    if !selected.is_bundled() {
        print_wallpaper(&selected, true);
    }
}

fn print_wallpaper(wallpaper: &WallpaperItem, selected: bool) {
    println!(
        "{} {:<40} {}",
        if selected { "*" } else { " " },
        wallpaper.identifier(),
        wallpaper.description.as_deref().unwrap_or("")
    );
}
