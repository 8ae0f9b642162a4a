//! Sanity checks for site content loaded from a file or the environment.

use folio_domain::config::{MotionConfig, SiteConfig};
use std::borrow::Cow;
use std::collections::HashSet;

/// Errors reported by [`validate`].
#[folio_derive::folio_error]
pub enum ContentError {
    /// A field is empty or malformed.
    #[error("Invalid content{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two records share a key that must be unique.
    #[error("Duplicate content{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Motion constants outside their usable range.
    #[error("Invalid motion settings{}: {message}", format_context(.context))]
    Motion { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn invalid(message: impl Into<Cow<'static, str>>) -> ContentError {
    ContentError::Invalid { message: message.into(), context: None }
}

/// Checks that the content is renderable.
///
/// Project titles and skill categories key their cards, so they must be unique.
/// Links must be absolute `http(s)` URLs and the contact e-mail must look like one.
///
/// # Errors
/// Returns the first [`ContentError`] found.
pub fn validate(site: &SiteConfig) -> Result<(), ContentError> {
    if site.profile.name.trim().is_empty() {
        return Err(invalid("profile name cannot be empty"));
    }

    let mut titles = HashSet::new();
    for project in &site.projects {
        if project.title.trim().is_empty() {
            return Err(invalid("project title cannot be empty"));
        }
        if !titles.insert(project.title.as_str()) {
            return Err(ContentError::Duplicate {
                message: format!("project '{}' is listed twice", project.title).into(),
                context: None,
            });
        }
        check_url(&project.link).context(format!("project '{}'", project.title))?;
    }

    let mut categories = HashSet::new();
    for group in &site.skills {
        if group.category.trim().is_empty() {
            return Err(invalid("skill category cannot be empty"));
        }
        if !categories.insert(group.category.as_str()) {
            return Err(ContentError::Duplicate {
                message: format!("skill category '{}' is listed twice", group.category).into(),
                context: None,
            });
        }
    }

    for social in &site.socials {
        check_url(&social.url).context(format!("social link '{}'", social.label))?;
    }

    if !site.contact.email.contains('@') {
        return Err(invalid(format!("'{}' is not an e-mail address", site.contact.email)));
    }

    if site.navigation.expanded_height.trim().is_empty() {
        return Err(invalid("navigation expanded_height cannot be empty"));
    }

    check_motion(&site.motion)
}

fn check_url(url: &str) -> Result<(), ContentError> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid(format!("'{url}' is not an absolute http(s) link"))),
    }
}

fn check_motion(motion: &MotionConfig) -> Result<(), ContentError> {
    let motion_err = |message: String| ContentError::Motion { message: message.into(), context: None };

    if !(motion.threshold > 0.0 && motion.threshold <= 1.0) {
        return Err(motion_err(format!("threshold {} must be within (0, 1]", motion.threshold)));
    }
    if !motion.distance.is_finite() || motion.distance < 0.0 {
        return Err(motion_err(format!("distance {} must be a non-negative number", motion.distance)));
    }
    if motion.easing.iter().any(|p| !p.is_finite()) {
        return Err(motion_err("easing control points must be finite".to_owned()));
    }
    Ok(())
}
