use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `FOLIO__PROFILE__NAME`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration layered from an optional file and the process environment.
///
/// 1. **Base File**: when `path` is given the file must exist; its format follows the
///    extension (`toml`, `json`, `yaml`, ...). Without a path only defaults apply.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`; nested keys are
///    separated by double underscores (`FOLIO__MOTION__THRESHOLD` maps to `motion.threshold`).
///
/// Fields missing from both layers fall back to the type's serde defaults.
///
/// # Errors
/// * The given file cannot be found or parsed.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.motion.duration_ms, 600);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(|p| p.as_ref()), None)
}

/// Same as [`load_config`] but reads overrides from `env` instead of the process environment.
pub(crate) fn load_layered<T>(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        info!("No config file given, using built-in defaults");
    }

    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::Direction;
    use folio_domain::config::SiteConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_file_or_env() {
        let cfg: SiteConfig = load_layered(None, Some(Map::new())).expect("defaults load");
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
            [profile]
            name = "Ada Lovelace"

            [sections.contact]
            direction = "left"
            delay_ms = 200

            [[projects]]
            title = "Difference Engine"
            description = "Mechanical calculator"
            tech = ["Brass", "Gears"]
            link = "https://example.org/engine"
            "#,
        )?;

        let cfg: SiteConfig = load_layered(Some(&path), Some(Map::new()))?;
        assert_eq!(cfg.profile.name, "Ada Lovelace");
        assert_eq!(cfg.profile.eyebrow, "Portfolio");
        assert_eq!(cfg.sections.contact.direction, Direction::Left);
        assert_eq!(cfg.sections.contact.delay_ms, 200);
        assert_eq!(cfg.projects.len(), 1);
        assert_eq!(cfg.projects[0].tech, ["Brass", "Gears"]);
        Ok(())
    }

    #[test]
    fn env_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, "[motion]\nthreshold = 0.5\nduration_ms = 900\n")?;

        let mut env = Map::new();
        env.insert("FOLIO__MOTION__THRESHOLD".to_owned(), "0.75".to_owned());
        env.insert("FOLIO__MOTION__FORCE_REDUCED".to_owned(), "true".to_owned());

        let cfg: SiteConfig = load_layered(Some(&path), Some(env))?;
        assert!((cfg.motion.threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(cfg.motion.duration_ms, 900);
        assert!(cfg.motion.force_reduced);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");

        let err = load_layered::<SiteConfig>(Some(&path), Some(Map::new()))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("Failed to build config"));
    }
}
