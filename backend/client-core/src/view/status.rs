use askama::Template;

/// Spinner with a message. Carries no `data-action` elements.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(
    source = r#"<div class="d-flex justify-content-center">
    <p>{{ message }}</p>
    <div class="spinner-border text-primary" role="status"></div>
</div>
"#,
    ext = "html"
)]
pub struct LoadingView {
    pub message: String,
}

pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data. Try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Template)]
#[template(
    source = r#"<div class="alert alert-danger alert-dismissible fade show" role="alert">
    <strong>Error!</strong> {{ message }}
    <button type="button" class="btn-close" data-action="dismiss" aria-label="Close"></button>
</div>
"#,
    ext = "html"
)]
pub struct ErrorView {
    pub message: &'static str,
}

impl Default for ErrorView {
    fn default() -> Self {
        Self {
            message: FETCH_ERROR_MESSAGE,
        }
    }
}
