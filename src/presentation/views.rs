use crate::application::error::{ErrorReport, HttpError};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Plain-text 404 used when a post identity does not resolve.
pub fn render_not_found_response(message: &'static str) -> Response {
    let mut response = (StatusCode::NOT_FOUND, message).into_response();
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        message,
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct FooterView {
    pub year: String,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub footer: FooterView,
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub footer: FooterView,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            footer: chrome.footer,
            content,
        }
    }
}

#[derive(Clone)]
pub struct PostSummaryView {
    pub title: String,
    pub excerpt: String,
    pub href: String,
    pub date: String,
}

#[derive(Clone)]
pub struct HomeView {
    pub starting_content: String,
    pub posts: Vec<PostSummaryView>,
}

#[derive(Clone)]
pub struct StaticPageView {
    pub heading: String,
    pub body: String,
}

#[derive(Clone)]
pub struct ComposeView {
    pub action: String,
}

#[derive(Clone)]
pub struct PostView {
    pub title: String,
    pub content: String,
    pub date: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct IndexTemplate {
    pub view: LayoutContext<HomeView>,
}

#[derive(Template)]
#[template(path = "static_page.html")]
pub struct StaticPageTemplate {
    pub view: LayoutContext<StaticPageView>,
}

#[derive(Template)]
#[template(path = "compose.html")]
pub struct ComposeTemplate {
    pub view: LayoutContext<ComposeView>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub view: LayoutContext<PostView>,
}
