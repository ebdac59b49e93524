use crate::app::App;
use crate::browse::BrowseSession;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::search::{Address, RequestAddress, SearchFormController, LISTINGS_PATH};
use crate::templates::components::SEARCH_ACTION;
use crate::templates::pages::{self, RESULTS_PATH};
use astra::Request;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let address = RequestAddress::new(&path, req.uri().query());

    info!(%method, href = %address.current().href(), "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),

        ("GET", LISTINGS_PATH) => {
            let session = open_session(app, address);
            let page = pages::properties_page(
                session.form(),
                &session.active_query(),
                session.state(),
                &app.gateway,
            );
            release_session(app, session);
            html_response(page)
        }

        // htmx partial: only the result area
        ("GET", RESULTS_PATH) => {
            let session = open_session(app, address);
            let view = pages::listing_view(&session.active_query(), session.state(), &app.gateway);
            release_session(app, session);
            html_response(view)
        }

        ("POST", SEARCH_ACTION) => {
            let body = read_body(&mut req)?;
            let form = SearchFormController::from_form_body(&body);
            let mut address = address;
            let target = form.submit(&mut address);
            redirect_response(&target)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Mount a session on the request address and give its fetch up to
/// `render_wait` to settle. A fetch parked by an earlier render of the same
/// query is resumed rather than issued again. A slow API renders as the
/// loading state, never as an error page.
fn open_session(app: &App, address: RequestAddress) -> BrowseSession<RequestAddress> {
    let query = SearchFormController::from_address(&address).query();
    let mut session = match app.pending.take(&query) {
        Some(fetcher) => {
            debug!(%query, "resuming pending fetch");
            BrowseSession::resume(address, fetcher)
        }
        None => BrowseSession::open(address, Arc::clone(&app.source)),
    };
    if !session.wait(app.render_wait).is_settled() {
        debug!(query = %session.active_query(), "listings still loading at render time");
    }
    session
}

/// Park a fetch that is still loading so the page's poll can pick it up.
fn release_session(app: &App, session: BrowseSession<RequestAddress>) {
    if !session.state().is_settled() {
        app.pending.park(session.into_fetcher());
    }
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(body)
}
