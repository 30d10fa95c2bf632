use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::warn;

use crate::{
    application::{journal::JournalService, repos::StoreHealth},
    domain::posts::NewPost,
    infra::assets,
    presentation::views::{
        ComposeTemplate, IndexTemplate, LayoutContext, PostTemplate, StaticPageTemplate,
        render_not_found_response, render_template_response,
    },
};

use super::{
    db_health_response,
    middleware::{log_responses, set_request_context},
};

pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found";

#[derive(Clone)]
pub struct HttpState {
    pub journal: Arc<JournalService>,
    pub health: Arc<dyn StoreHealth>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/compose", get(compose_form).post(compose_submit))
        .route("/posts/{post_id}", get(post_detail))
        .route("/_health/db", get(public_health))
        .fallback(assets::serve_public)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

/// Untyped compose submission. Either field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ComposeForm {
    #[serde(rename = "postTitle")]
    post_title: Option<String>,
    #[serde(rename = "postBody")]
    post_body: Option<String>,
}

impl From<ComposeForm> for NewPost {
    fn from(form: ComposeForm) -> Self {
        NewPost::from_fields(form.post_title, form.post_body)
    }
}

async fn index(State(state): State<HttpState>) -> Response {
    match state.journal.home().await {
        Ok(content) => {
            let view = LayoutContext::new(state.journal.chrome(), content);
            render_template_response(IndexTemplate { view }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}

async fn about(State(state): State<HttpState>) -> Response {
    let view = LayoutContext::new(state.journal.chrome(), state.journal.about());
    render_template_response(StaticPageTemplate { view }, StatusCode::OK)
}

async fn contact(State(state): State<HttpState>) -> Response {
    let view = LayoutContext::new(state.journal.chrome(), state.journal.contact());
    render_template_response(StaticPageTemplate { view }, StatusCode::OK)
}

async fn compose_form(State(state): State<HttpState>) -> Response {
    let view = LayoutContext::new(state.journal.chrome(), state.journal.compose());
    render_template_response(ComposeTemplate { view }, StatusCode::OK)
}

/// Store the submitted post, then send the author home.
///
/// The redirect is issued only after the write has finished. A failed write is
/// logged by the service and the author is still redirected. A body that does
/// not decode as a form is stored as an empty post.
async fn compose_submit(
    State(state): State<HttpState>,
    form: Result<Form<ComposeForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(
                target = "journal::http::compose",
                reason = %rejection.body_text(),
                "compose body was not a form; storing empty fields"
            );
            ComposeForm::default()
        }
    };

    if let Err(err) = state.journal.create_post(NewPost::from(form)).await {
        warn!(
            target = "journal::http::compose",
            status = err.status().as_u16(),
            "compose submission was not stored; redirecting anyway"
        );
    }

    Redirect::to("/").into_response()
}

async fn post_detail(
    State(state): State<HttpState>,
    post_id: Result<Path<String>, PathRejection>,
) -> Response {
    let Ok(Path(post_id)) = post_id else {
        return render_not_found_response(POST_NOT_FOUND_MESSAGE);
    };

    match state.journal.post_detail(&post_id).await {
        Ok(Some(content)) => {
            let view = LayoutContext::new(state.journal.chrome(), content);
            render_template_response(PostTemplate { view }, StatusCode::OK)
        }
        Ok(None) => render_not_found_response(POST_NOT_FOUND_MESSAGE),
        Err(err) => err.into_response(),
    }
}

async fn public_health(State(state): State<HttpState>) -> Response {
    db_health_response(state.health.ping().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_form_coerces_missing_fields() {
        let form = ComposeForm {
            post_title: Some("Hello".to_string()),
            post_body: None,
        };

        assert_eq!(
            NewPost::from(form),
            NewPost {
                title: "Hello".to_string(),
                content: String::new(),
            }
        );
    }
}
