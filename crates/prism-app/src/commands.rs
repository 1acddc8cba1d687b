//! Subcommand execution against a [`ThemeStore`].

use std::fs;
use std::path::Path;

use prism_common::{IoResultExt, ThemeError};
use prism_config::{compile, load_metadata_from_path};
use prism_platform::ThemePaths;
use prism_store::{Theme, ThemeStore};

use crate::cli::{Args, Command};

pub fn run(args: &Args) -> Result<(), ThemeError> {
    let paths = ThemePaths::resolve(args.home.as_deref())?;
    tracing::debug!(root = %paths.root().display(), "using prism root");
    let store = ThemeStore::new(paths);

    match &args.command {
        Command::List { json } => {
            let themes = store.list()?;
            if *json {
                println!("{}", to_json(&themes));
                return Ok(());
            }
            let current = store.current()?.map(|t| t.path);
            let favorites = store.preferences()?.favorites;
            for theme in &themes {
                let is_current = current.as_deref() == Some(theme.path.as_path());
                let is_favorite = favorites.contains(&theme.name);
                println!("{}", theme_line(theme, is_current, is_favorite));
            }
        }
        Command::Current => match store.current()? {
            Some(theme) => println!("{} ({})", theme.name, theme.path.display()),
            None => println!("no theme applied"),
        },
        Command::Apply { name } => {
            let theme = store.apply(name)?;
            println!("applied {}", theme.name);
        }
        Command::Create { name, from } => {
            let metadata = load_metadata_from_path(from)?;
            let theme = store.create(name, &metadata)?;
            println!("created {} at {}", theme.name, theme.path.display());
        }
        Command::Update { name, from } => {
            let metadata = load_metadata_from_path(from)?;
            let theme = store.update(name, &metadata)?;
            println!("updated {}", theme.name);
        }
        Command::Delete { name } => {
            store.delete(name)?;
            println!("deleted {name}");
        }
        Command::Favorite { name } => {
            let favorite = store.toggle_favorite(name)?;
            let verb = if favorite { "added" } else { "removed" };
            println!("{verb} {name} {} favorites", if favorite { "to" } else { "from" });
        }
        Command::EnableApp { target, state } => {
            store.set_app_enabled(*target, state.enabled())?;
            println!("{} {}", target.id(), if state.enabled() { "enabled" } else { "disabled" });
        }
        Command::Wallpaper { path, clear } => {
            let path = if *clear { None } else { path.clone() };
            let recorded = path.is_some();
            store.set_wallpaper(path)?;
            println!("wallpaper {}", if recorded { "recorded" } else { "cleared" });
        }
        Command::Compile { from, out } => compile_to_dir(from, out)?,
    }
    Ok(())
}

/// Compile a definition file into `out`, one file per target plus the
/// normalized `theme.json`.
fn compile_to_dir(from: &Path, out: &Path) -> Result<(), ThemeError> {
    let metadata = load_metadata_from_path(from)?.normalized()?;
    let compiled = compile(&metadata)?;

    fs::create_dir_all(out).at_path(out)?;
    let theme_file = out.join(prism_platform::paths::THEME_FILE);
    fs::write(&theme_file, metadata.to_json_pretty() + "\n").at_path(&theme_file)?;
    for (file, body) in compiled.iter() {
        let path = out.join(file);
        fs::write(&path, body).at_path(&path)?;
    }

    println!("wrote {} files to {}", compiled.len() + 1, out.display());
    Ok(())
}

fn to_json(themes: &[Theme]) -> String {
    serde_json::to_string_pretty(themes).unwrap_or_else(|_| "[]".into())
}

/// One `list` row: `* name  [custom] (light) ★`.
pub(crate) fn theme_line(theme: &Theme, is_current: bool, is_favorite: bool) -> String {
    let mut line = format!("{} {}", if is_current { '*' } else { ' ' }, theme.name);
    if theme.is_custom {
        line.push_str("  [custom]");
    }
    if theme.is_light {
        line.push_str(" (light)");
    }
    if is_favorite {
        line.push_str(" ★");
    }
    line
}
