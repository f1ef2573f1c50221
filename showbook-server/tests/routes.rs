//! HTTP behavior that needs a real Postgres behind the router.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use showbook_server::db::VenueRepo;
use showbook_server::http::{build_router, ServerConfig};
use showbook_server::models::VenueForm;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrator = "showbook_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn editing_a_missing_record_is_404_even_with_a_bad_form(pool: PgPool) -> sqlx::Result<()> {
    let app = build_router(pool, &ServerConfig::default());

    for uri in ["/venues/9999/edit", "/artists/9999/edit"] {
        let response = app
            .clone()
            .oneshot(post_form(uri, "name=&state=ZZ"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    Ok(())
}

#[sqlx::test(migrator = "showbook_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn editing_an_existing_venue(pool: PgPool) -> sqlx::Result<()> {
    let id = VenueRepo::new(&pool)
        .create(
            &VenueForm {
                name: "The Musical Hop".into(),
                city: "San Francisco".into(),
                state: "CA".into(),
                address: "1015 Folsom Street".into(),
                ..Default::default()
            }
            .validate()
            .unwrap(),
        )
        .await
        .unwrap();
    let app = build_router(pool.clone(), &ServerConfig::default());
    let uri = format!("/venues/{}/edit", id);

    let response = app
        .clone()
        .oneshot(post_form(&uri, "name=&city=Oakland&state=CA&address=x"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["fields"][0]["field"], "name");

    let response = app
        .oneshot(post_form(
            &uri,
            "name=The+Musical+Hop&city=Oakland&state=CA&address=1015+Folsom+Street",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/venues/{}", id)
    );
    assert_eq!(VenueRepo::new(&pool).get(id).await.unwrap().city, "Oakland");

    Ok(())
}
