use crate::domain::gallery::Gallery;
use crate::domain::property::decode_path_id;
use crate::domain::query::ListingQuery;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, html_response, html_response_with_status};
use crate::state::AppState;
use crate::templates::pages;
use astra::Request;
use tracing::{debug, warn};
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();
    debug!(method, path, query, "request");

    if method != "GET" {
        return Err(ServerError::NotFound);
    }

    match path {
        "/" => html_response(pages::home_page(&state.catalog.snapshot())),
        "/properties" => {
            let listing_query = ListingQuery::parse(query);
            let catalog = state.catalog.snapshot();
            let vm = pages::ListingVm::from_state(&catalog, &listing_query);
            html_response(pages::properties_page(&listing_query, &vm))
        }
        "/static/main.css" => css_response(MAIN_CSS),
        _ => match path.strip_prefix("/property/") {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                property_detail(state, &decode_path_id(segment), query)
            }
            _ => Err(ServerError::NotFound),
        },
    }
}

fn property_detail(state: &AppState, id: &str, query: Option<&str>) -> ResultResp {
    match state.details.find_detail(id) {
        Ok(Some(detail)) => {
            let pairs: Vec<(String, String)> = query
                .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
                .unwrap_or_default();
            let gallery = Gallery::from_pairs(
                detail.images.len(),
                pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
            html_response(pages::property_detail_page(&detail, &gallery))
        }
        Ok(None) => html_response_with_status(404, pages::property_not_found_page(id)),
        Err(e) => {
            warn!(id, error = %e, "property lookup failed");
            html_response_with_status(503, pages::property_unavailable_page())
        }
    }
}
