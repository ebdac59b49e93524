use maud::{html, Markup};

pub mod error;
pub mod listing_card;
pub mod search_form;

pub use error::html_error_response;
pub use listing_card::listing_card;
pub use search_form::{search_form, SEARCH_ACTION};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
