use crate::errors::ServerError;
use crate::templates::{desktop_layout, error_page, Nav};
use astra::{Body, Response, ResponseBuilder};
use tracing::error;

/// Render a `ServerError` as a site-styled HTML page with its status code.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "The page you're looking for doesn't exist.".to_string(),
        ServerError::Catalog(_) => "Listings are unavailable right now.".to_string(),
        ServerError::DbError(_) | ServerError::InternalError => "Something went wrong.".to_string(),
    };

    if status >= 500 {
        error!(status, error = %err, "request failed");
    }

    let page = desktop_layout(
        &format!("Error {status}"),
        Nav::None,
        None,
        error_page(status, &message),
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| {
            let mut fallback = Response::new(Body::from("Internal Server Error"));
            *fallback.status_mut() = 500u16.try_into().unwrap_or_default();
            fallback
        })
}
