//! Askama HTML template for the setup page

use askama::Template;

/// One page, three states: form, completed, already configured.
#[derive(Template)]
#[template(path = "setup.html")]
pub struct SetupTemplate {
    pub title: String,
    pub completed: bool,
    pub already_configured: bool,
    /// Rendered unescaped; both come from operator configuration.
    pub login_url: String,
    pub database_path: String,
    pub error: Option<String>,
    /// Echoed back into the username input; passwords never are.
    pub username: String,
}

impl SetupTemplate {
    fn base(title: &str) -> Self {
        Self {
            title: title.to_string(),
            completed: false,
            already_configured: false,
            login_url: String::new(),
            database_path: String::new(),
            error: None,
            username: String::new(),
        }
    }

    pub fn form(title: &str, username: &str, error: Option<String>) -> Self {
        Self {
            username: username.to_string(),
            error,
            ..Self::base(title)
        }
    }

    pub fn completed(title: &str, login_url: &str) -> Self {
        Self {
            completed: true,
            login_url: login_url.to_string(),
            ..Self::base(title)
        }
    }

    pub fn already_configured(title: &str, database_path: &str) -> Self {
        Self {
            already_configured: true,
            database_path: database_path.to_string(),
            ..Self::base(title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_escapes_error_and_username() {
        let html = SetupTemplate::form(
            "Magazine Setup",
            r#""><script>alert(1)</script>"#,
            Some("Setup failed: <b>boom</b>".to_string()),
        )
        .render()
        .unwrap();

        assert!(html.contains("Create your admin account to get started"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("alert(1)"));
        assert!(html.contains("Setup failed: "));
        assert!(!html.contains("<b>boom"));
    }

    #[test]
    fn form_without_error_has_no_alert() {
        let html = SetupTemplate::form("Magazine Setup", "", None).render().unwrap();
        assert!(html.contains(r#"<form method="POST">"#));
        assert!(!html.contains(r#"class="alert"#));
    }

    #[test]
    fn completed_links_to_login() {
        let html = SetupTemplate::completed("Magazine Setup", "/admin/login")
            .render()
            .unwrap();
        assert!(html.contains("Setup Complete"));
        assert!(html.contains(r#"href="/admin/login""#));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn already_configured_names_database_file() {
        let html = SetupTemplate::already_configured("Magazine Setup", "data/magazine.db")
            .render()
            .unwrap();
        assert!(html.contains("Setup already completed."));
        assert!(html.contains("<code>data/magazine.db</code>"));
        assert!(!html.contains("<form"));
    }
}
