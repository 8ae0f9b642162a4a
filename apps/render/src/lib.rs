//! Static renderer: turns the site configuration into a self-contained `index.html`.

mod document;

pub use document::{Document, DocumentProps, render_document};

use clap::Parser;
use folio::domain::config::SiteConfig;
use folio::kernel::config::{ConfigError, load_config};
use folio::kernel::{ContentError, validate};
use folio_logger::{LevelFilter, Logger, LoggerError};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[folio_derive::folio_error]
pub enum RenderError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Content error{}: {source}", format_context(.context))]
    Content { source: ContentError, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },
}

/// Renders the portfolio page to a static HTML document.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-render", version, about)]
pub struct Cli {
    /// Site configuration file (TOML, JSON or YAML). Built-in content when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write the document.
    #[arg(short, long, value_name = "PATH", default_value = "dist/index.html")]
    pub out: PathBuf,

    /// Stylesheet linked from the document head.
    #[arg(long, value_name = "HREF", default_value = "/assets/tailwind.css")]
    pub stylesheet: String,

    /// Also write rolling log files to this directory.
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads and validates the site configuration named on the command line.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed, or the content does not validate.
    pub fn site(&self) -> Result<SiteConfig, RenderError> {
        let mut site: SiteConfig = load_config(self.config.as_deref())?;
        validate(&site)?;
        if let Some(dir) = &self.log_dir {
            site.logging.directory = Some(dir.clone());
        }
        Ok(site)
    }

    /// Installs the global logger from the `[logging]` table and the command-line overrides,
    /// then records where the configuration came from.
    ///
    /// # Errors
    /// Fails on an unknown level, an unusable log directory, or a second initialisation.
    pub fn logger(&self, site: &SiteConfig) -> Result<Logger, RenderError> {
        let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).with_config(&site.logging)?;
        if self.verbose {
            builder = builder.level(LevelFilter::DEBUG);
        }
        let logger = builder.init()?;

        // Loading ran before any subscriber existed; report its outcome now.
        match &self.config {
            Some(path) => info!(path = %path.display(), "configuration loaded"),
            None => info!("configuration loaded from built-in defaults"),
        }
        Ok(logger)
    }
}

/// Renders `site` and writes the document to `out`, creating parent directories.
///
/// # Errors
/// Returns [`RenderError::Io`] when the file cannot be written.
pub fn write_site(site: &SiteConfig, stylesheet: &str, out: &Path) -> Result<usize, RenderError> {
    let html = render_document(site, stylesheet);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("creating {}", parent.display()))?;
    }
    fs::write(out, &html).context(format!("writing {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "page rendered");
    Ok(html.len())
}
