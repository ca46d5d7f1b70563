//! Enterprise-edition navigation extension.

use super::{NavConfig, NavEntry};

/// Append the enterprise-only entries to a base menu.
///
/// Copy-on-extend: the input is left untouched and a new menu is returned
/// with the audit-log entry appended last. No deduplication is performed —
/// a base menu that already links "/audit" ends up with two such entries.
pub fn extend_navigation(base: &NavConfig) -> NavConfig {
    let mut nav_main = base.nav_main.clone();
    nav_main.push(NavEntry::new("Audit Logs (EE)", "/audit", "shield-alert"));
    NavConfig::new(nav_main)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base() -> NavConfig {
        NavConfig::new(vec![
            NavEntry::new("Home", "/", "home"),
            NavEntry::new("Plugins", "/plugins", "package"),
        ])
    }

    #[test]
    fn appends_exactly_one_audit_entry() {
        let extended = extend_navigation(&base());

        assert_eq!(extended.nav_main.len(), base().nav_main.len() + 1);
        let last = extended.nav_main.last().unwrap();
        assert_eq!(last.name, "Audit Logs (EE)");
        assert_eq!(last.url, "/audit");
        assert_eq!(last.icon, "shield-alert");
    }

    #[test]
    fn preserves_base_order() {
        let input = base();
        let extended = extend_navigation(&input);
        assert_eq!(&extended.nav_main[..input.nav_main.len()], &input.nav_main[..]);
    }

    #[test]
    fn does_not_mutate_input() {
        let input = base();
        let snapshot = input.clone();
        let _ = extend_navigation(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn extends_empty_menu() {
        let extended = extend_navigation(&NavConfig::default());
        assert_eq!(extended.nav_main.len(), 1);
        assert_eq!(extended.nav_main[0].url, "/audit");
    }

    // The extender performs no deduplication: a base menu that already
    // links "/audit" gains a second entry with the same url.
    #[test]
    fn duplicates_preexisting_audit_entry() {
        let input = NavConfig::new(vec![NavEntry::new("Audit", "/audit", "shield")]);
        let extended = extend_navigation(&input);

        let audit_count = extended
            .nav_main
            .iter()
            .filter(|e| e.url == "/audit")
            .count();
        assert_eq!(audit_count, 2);
    }
}
