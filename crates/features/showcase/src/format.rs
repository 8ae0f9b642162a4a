use chrono::Datelike;

/// `mailto:` link for an address.
#[must_use]
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Footer copyright line.
#[must_use]
pub fn copyright(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

/// Calendar year in the visitor's (or renderer's) local time zone.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_trims() {
        assert_eq!(mailto(" me@example.com "), "mailto:me@example.com");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2025, "Brody Broughton"), "© 2025 Brody Broughton. All rights reserved.");
    }

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
