use askama::Template;
use axum::{Form, extract::State, response::Html};
use tracing::{info, warn};

use crate::error::SetupError;
use crate::router::SetupState;
use crate::setup::{SetupForm, is_setup_complete};
use crate::templates::SetupTemplate;

/// GET / -> the form, or the "already completed" notice.
pub async fn setup_page(State(state): State<SetupState>) -> Result<Html<String>, SetupError> {
    let site = &state.config.site;
    let template = if is_setup_complete(state.service.database_path()).await {
        SetupTemplate::already_configured(&site.title, &state.database_path_display())
    } else {
        SetupTemplate::form(&site.title, "", None)
    };
    render(template)
}

/// POST / -> validate, run setup, and render the resulting state.
pub async fn setup_submit(
    State(state): State<SetupState>,
    Form(form): Form<SetupForm>,
) -> Result<Html<String>, SetupError> {
    let site = &state.config.site;

    if is_setup_complete(state.service.database_path()).await {
        info!("setup submission ignored; already configured");
        return render(SetupTemplate::already_configured(
            &site.title,
            &state.database_path_display(),
        ));
    }

    let admin = match form.validate() {
        Ok(admin) => admin,
        Err(e) => {
            info!(reason = %e, "setup form rejected");
            return render(SetupTemplate::form(
                &site.title,
                &form.username,
                Some(e.to_string()),
            ));
        }
    };

    let template = match state.service.run(&admin).await {
        Ok(_) => SetupTemplate::completed(&site.title, &site.login_url),
        Err(SetupError::AlreadyConfigured) => {
            SetupTemplate::already_configured(&site.title, &state.database_path_display())
        }
        Err(e) => {
            warn!(error = %e, "setup failed");
            SetupTemplate::form(
                &site.title,
                &form.username,
                Some(format!("Setup failed: {e}")),
            )
        }
    };
    render(template)
}

fn render(template: SetupTemplate) -> Result<Html<String>, SetupError> {
    Ok(Html(template.render()?))
}
