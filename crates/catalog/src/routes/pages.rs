//! Static page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Display the about page.
#[instrument]
pub async fn about() -> AboutTemplate {
    AboutTemplate
}
