//! Landing page: where to go from here

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub links: Vec<Link>,
}

#[derive(Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: &'static str,
}

const LINKS: [(&str, &str); 7] = [
    ("venues", "/venues"),
    ("artists", "/artists"),
    ("shows", "/shows"),
    ("new_venue", "/venues/create"),
    ("new_artist", "/artists/create"),
    ("new_show", "/shows/create"),
    ("health", "/health"),
];

/// GET /
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        name: "showbook",
        version: env!("CARGO_PKG_VERSION"),
        links: LINKS.iter().map(|&(rel, href)| Link { rel, href }).collect(),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_links_every_listing() {
        let Json(body) = home().await;
        let hrefs: Vec<_> = body.links.iter().map(|l| l.href).collect();
        for href in ["/venues", "/artists", "/shows"] {
            assert!(hrefs.contains(&href), "missing {}", href);
        }
    }
}
