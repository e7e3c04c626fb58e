// End-to-end redirect resolution against a local mock server.
//
// These tests exercise the real reqwest transport: redirect chains, relative
// Location resolution, cookie propagation across hops, the redirect budget,
// and loopback rejection under the default policy. The server binds to
// 127.0.0.1, so every test that follows a chain opts into
// `allow_private_addresses`; the one test that keeps the default policy
// asserts the server is never contacted at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use unshorten::{Config, Unshortener, UnshortenError};

struct TestServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

/// Starts a mock origin with redirect-chain, cookie, and relative-redirect
/// routes. Every handled request bumps the shared hit counter.
async fn start_server() -> TestServer {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route(
            "/hop/{n}",
            get({
                let hits = hits.clone();
                move |Path(n): Path<usize>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if n > 0 {
                        Redirect::temporary(&format!("/hop/{}", n - 1)).into_response()
                    } else {
                        "final destination".into_response()
                    }
                }
            }),
        )
        .route(
            "/relative",
            get({
                let hits = hits.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Redirect::temporary("/landed?x=1")
                }
            }),
        )
        .route(
            "/landed",
            get({
                let hits = hits.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "landed"
                }
            }),
        )
        .route(
            "/set-cookie",
            get({
                let hits = hits.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (
                        [(header::SET_COOKIE, "session=abc; Path=/")],
                        Redirect::temporary("/need-cookie"),
                    )
                }
            }),
        )
        .route(
            "/need-cookie",
            get({
                let hits = hits.clone();
                move |headers: HeaderMap| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let has_session = headers
                        .get(header::COOKIE)
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v.contains("session=abc"));
                    if has_session {
                        "authenticated".into_response()
                    } else {
                        Redirect::temporary("/cookie-missing").into_response()
                    }
                }
            }),
        )
        .route(
            "/cookie-missing",
            get({
                let hits = hits.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "no cookie"
                }
            }),
        )
        .route(
            "/final",
            get({
                let hits = hits.clone();
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "done"
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        base: format!("http://{addr}"),
        hits,
    }
}

fn local_config() -> Config {
    Config {
        // The mock origin is loopback; the policy tests below keep the default.
        allow_private_addresses: true,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_follows_redirect_chain_to_final_url() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();

    let final_url = unshortener
        .resolve(&format!("{}/hop/3", server.base))
        .await
        .unwrap();

    assert_eq!(final_url, format!("{}/hop/0", server.base));
    assert_eq!(server.hits.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_relative_location_resolved_against_current_hop() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();

    let final_url = unshortener
        .resolve(&format!("{}/relative", server.base))
        .await
        .unwrap();

    assert_eq!(final_url, format!("{}/landed?x=1", server.base));
}

#[tokio::test]
async fn test_cookie_from_first_hop_sent_on_second_hop() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();

    let final_url = unshortener
        .resolve(&format!("{}/set-cookie", server.base))
        .await
        .unwrap();

    // With the session cookie replayed, /need-cookie terminates the chain.
    assert_eq!(final_url, format!("{}/need-cookie", server.base));
}

#[tokio::test]
async fn test_cookie_jar_not_shared_across_resolutions() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();

    // First resolution picks up the session cookie.
    let first = unshortener
        .resolve(&format!("{}/set-cookie", server.base))
        .await
        .unwrap();
    assert_eq!(first, format!("{}/need-cookie", server.base));

    // A second, independent resolution starts with an empty jar and is
    // bounced to /cookie-missing.
    let second = unshortener
        .resolve(&format!("{}/need-cookie", server.base))
        .await
        .unwrap();
    assert_eq!(second, format!("{}/cookie-missing", server.base));
}

#[tokio::test]
async fn test_redirect_budget_exceeded_on_long_chain() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();

    let result = unshortener.resolve(&format!("{}/hop/10", server.base)).await;

    assert!(matches!(result, Err(UnshortenError::RedirectBudgetExceeded)));
    // 5 redirects followed = 6 requests; the 6th redirect is refused before
    // a 7th request reaches the server.
    assert_eq!(server.hits.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn test_loopback_rejected_under_default_policy() {
    let server = start_server().await;
    let unshortener = Unshortener::new(Config::default()).unwrap();

    let result = unshortener.resolve(&format!("{}/hop/1", server.base)).await;

    assert!(matches!(
        result,
        Err(UnshortenError::AddressNotAllowed { .. })
    ));
    // Rejected at validation: the server never sees a request.
    assert_eq!(server.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_zero_redirect_url_is_idempotent() {
    let server = start_server().await;
    let unshortener = Unshortener::new(local_config()).unwrap();
    let url = format!("{}/final", server.base);

    let first = unshortener.resolve(&url).await.unwrap();
    let second = unshortener.resolve(&url).await.unwrap();

    assert_eq!(first, url);
    assert_eq!(second, url);
    assert_eq!(server.hits.load(Ordering::SeqCst), 2);
}
