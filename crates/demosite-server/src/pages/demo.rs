//! Demo-Form page: create and list Demo records.
//!
//! GET renders the form and the listing. POST validates the submission; on
//! success it redirects back here (302) so a refresh cannot re-submit, on
//! failure it re-renders the form with an inline message and writes nothing.

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use demosite_core::error::DemoSiteError;
use demosite_core::model::DemoRecord;

use super::layout::{escape_html, page};
use crate::app_state::AppState;
use crate::error::PageError;

pub const DEMO_PATH: &str = "/demo";

/// Urlencoded form body. Absent fields count as empty, and so does a body
/// that cannot be decoded as a form at all.
#[derive(Debug, Default, Deserialize)]
pub struct DemoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub async fn demo_list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let demos = state.store().list_all().await?;
    Ok(Html(render(&demos, &DemoForm::default(), None)))
}

pub async fn demo_submit(
    State(state): State<AppState>,
    form: Result<Form<DemoForm>, FormRejection>,
) -> Result<Response, PageError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "demo submission is not a urlencoded form");
            DemoForm::default()
        }
    };
    match state.store().create(&form.name, &form.description).await {
        Ok(_) => Ok((StatusCode::FOUND, [(header::LOCATION, DEMO_PATH)]).into_response()),
        Err(DemoSiteError::Validation(e)) => {
            tracing::debug!(error = %e, "demo submission rejected");
            let demos = state.store().list_all().await?;
            Ok(Html(render(&demos, &form, Some(&e.to_string()))).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

fn render(demos: &[DemoRecord], form: &DemoForm, error: Option<&str>) -> String {
    let mut body = String::from(
        r#"        <h1 class="text-3xl font-bold mb-6">DB Demo</h1>
"#,
    );

    if let Some(msg) = error {
        body.push_str(&format!(
            r#"        <div class="bg-red-100 text-red-700 rounded p-4 mb-6" role="alert">{}</div>
"#,
            escape_html(msg)
        ));
    }

    body.push_str(&format!(
        r#"        <form method="post" action="{action}" class="bg-white rounded-lg shadow p-6 mb-8 space-y-4">
            <label class="block">
                <span class="text-gray-700">Name</span>
                <input type="text" name="name" value="{name}" class="mt-1 block w-full border rounded p-2">
            </label>
            <label class="block">
                <span class="text-gray-700">Description</span>
                <textarea name="description" class="mt-1 block w-full border rounded p-2">{description}</textarea>
            </label>
            <button type="submit" class="bg-blue-600 text-white rounded px-4 py-2">Add</button>
        </form>
"#,
        action = DEMO_PATH,
        name = escape_html(&form.name),
        description = escape_html(&form.description),
    ));

    if demos.is_empty() {
        body.push_str(
            r#"        <p class="text-gray-500">No demo records yet.</p>
"#,
        );
    } else {
        body.push_str(
            r#"        <ul class="space-y-3">
"#,
        );
        for d in demos {
            body.push_str(&format!(
                r#"            <li class="bg-white rounded shadow p-4"><h2 class="font-semibold">{}</h2><p class="text-gray-600">{}</p></li>
"#,
                escape_html(&d.name),
                escape_html(&d.description)
            ));
        }
        body.push_str(
            r#"        </ul>
"#,
        );
    }

    body.push_str(r#"        <a class="inline-block mt-8 text-blue-600 hover:underline" href="/">Back to Home</a>"#);
    page("DB Demo - Demosite", &body)
}
