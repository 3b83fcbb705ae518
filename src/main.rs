// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unic_langid::LanguageIdentifier;
use webui_prefs::config;
use webui_prefs::error::{Error, Result};
use webui_prefs::i18n::{self, DocumentTranslator};
use webui_prefs::storage::FileStore;
use webui_prefs::theme::{ThemePreference, ThemeView};

const HELP: &str = "\
webui-prefs: preview dashboard translations and theme preference

USAGE:
  webui-prefs [OPTIONS] [KEY...]

OPTIONS:
  --lang CODE          Select and remember a UI language
  --toggle-theme       Flip between light and dark mode
  --config-dir DIR     Directory holding settings.toml
  --data-dir DIR       Directory holding preferences.toml
  -h, --help           Print this help
";

struct Flags {
    lang: Option<String>,
    toggle_theme: bool,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    keys: Vec<String>,
}

/// Stands in for the page translator outside a browser.
struct LogTranslator;

impl DocumentTranslator for LogTranslator {
    fn change_language(&mut self, language: &LanguageIdentifier) {
        tracing::debug!(%language, "document translated");
    }
}

struct LogView;

impl ThemeView for LogView {
    fn set_root_marker(&mut self, marker: &str, present: bool) {
        tracing::debug!(marker, present, "root marker");
    }

    fn set_logo(&mut self, source: &str) {
        tracing::debug!(source, "logo");
    }

    fn set_toggle_icon(&mut self, icon: &str) {
        tracing::debug!(icon, "toggle icon");
    }
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let to_config_error = |e: pico_args::Error| Error::Config(e.to_string());
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(to_config_error)?,
        toggle_theme: args.contains("--toggle-theme"),
        config_dir: args.opt_value_from_str("--config-dir").map_err(to_config_error)?,
        data_dir: args.opt_value_from_str("--data-dir").map_err(to_config_error)?,
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(Some(flags))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(flags) = parse_flags()? else {
        print!("{}", HELP);
        return Ok(());
    };

    let (mut cfg, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(key) = warning {
        tracing::warn!(key = %key, "settings.toml could not be read");
    }

    let reported_locale = sys_locale::get_locale().unwrap_or_default();
    let mut locale = i18n::embedded_resolver(
        &cfg.general.default_language,
        Box::new(LogTranslator),
        &reported_locale,
    )?;

    if let Some(code) = &flags.lang {
        locale.set_active_language(code)?;
        cfg.general.language = Some(locale.active_language().to_string());
        if let Err(error) = config::save_with_override(&cfg, flags.config_dir.clone()) {
            tracing::warn!(%error, "failed to save config");
        }
    } else if let Some(code) = &cfg.general.language {
        if let Err(error) = locale.set_active_language(code) {
            tracing::warn!(%error, "ignoring language from settings.toml");
        }
    }

    let Some((store, warning)) = FileStore::open_in(flags.data_dir.clone()) else {
        return Err(Error::Io("no data directory available".to_string()));
    };
    if let Some(key) = warning {
        tracing::warn!(key = %key, "preference store could not be read");
    }

    let mut theme =
        ThemePreference::restore_on_load(store, Box::new(LogView), &cfg.theme.storage_key);
    theme.finish_load();
    if flags.toggle_theme {
        theme.toggle();
    }

    println!(
        "language: {} ({})",
        locale.active_language(),
        locale.active_language_name()
    );
    println!("theme: {}", theme.mode());
    for key in &flags.keys {
        println!("{} = {}", key, locale.translate(key));
    }

    Ok(())
}
