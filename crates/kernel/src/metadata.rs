//! Site metadata descriptors served to crawlers.
//!
//! Pure data builders; the routing layer renders them into robots.txt and
//! the sitemap document.

use serde::Serialize;

use crate::config::Config;
use crate::nav::NavConfig;

/// A robots.txt rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRule {
    /// User agent the rule set applies to.
    pub user_agent: String,
    /// Allowed path prefix.
    pub allow: String,
    /// Disallowed path prefix.
    pub disallow: String,
}

/// Declarative robots policy: one rule set plus the sitemap location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: RobotsRule,
    /// Absolute sitemap URL.
    pub sitemap: String,
}

impl RobotsPolicy {
    /// Render the conventional robots.txt text form.
    pub fn to_robots_txt(&self) -> String {
        format!(
            "User-agent: {}\nAllow: {}\nDisallow: {}\n\nSitemap: {}\n",
            self.rules.user_agent, self.rules.allow, self.rules.disallow, self.sitemap
        )
    }
}

/// Build the robots policy for the configured site.
///
/// Crawlers may index everything except the private path prefix.
pub fn robots_policy(config: &Config) -> RobotsPolicy {
    RobotsPolicy {
        rules: RobotsRule {
            user_agent: "*".to_string(),
            allow: "/".to_string(),
            disallow: "/private/".to_string(),
        },
        sitemap: sitemap_url(config),
    }
}

/// Absolute URL of the sitemap document.
pub fn sitemap_url(config: &Config) -> String {
    format!("{}/sitemap.xml", config.app_url)
}

/// Render a minimal sitemap for the configured site.
///
/// One `<url>` entry per navigation entry, absolutized against the
/// application base URL.
pub fn sitemap_xml(config: &Config, nav: &NavConfig) -> String {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in &nav.nav_main {
        body.push_str("  <url><loc>");
        body.push_str(&config.app_url);
        body.push_str(&entry.url);
        body.push_str("</loc></url>\n");
    }
    body.push_str("</urlset>\n");
    body
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::nav::NavEntry;

    fn config() -> Config {
        Config {
            port: 3000,
            app_url: "https://example.com".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }

    #[test]
    fn robots_policy_matches_contract() {
        let policy = robots_policy(&config());

        assert_eq!(policy.rules.user_agent, "*");
        assert_eq!(policy.rules.allow, "/");
        assert_eq!(policy.rules.disallow, "/private/");
        assert_eq!(policy.sitemap, "https://example.com/sitemap.xml");
    }

    #[test]
    fn sitemap_url_appends_fixed_path() {
        assert_eq!(sitemap_url(&config()), "https://example.com/sitemap.xml");
    }

    #[test]
    fn robots_txt_rendering() {
        let text = robots_policy(&config()).to_robots_txt();

        assert!(text.contains("User-agent: *\n"));
        assert!(text.contains("Allow: /\n"));
        assert!(text.contains("Disallow: /private/\n"));
        assert!(text.contains("Sitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn sitemap_lists_absolute_menu_urls() {
        let nav = NavConfig::new(vec![
            NavEntry::new("Home", "/", "home"),
            NavEntry::new("Plugins", "/plugins", "package"),
        ]);
        let xml = sitemap_xml(&config(), &nav);

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/plugins</loc>"));
        assert!(xml.starts_with("<?xml"));
    }
}
