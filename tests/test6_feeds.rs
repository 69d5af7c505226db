use fairway_site::controller::news::{FALLBACK_THUMBNAIL, fetch_news, parse_news_feed};
use fairway_site::controller::photos::{fetch_photos, parse_photo_feed};

#[test]
fn news_items_are_cleaned_for_the_cards() {
    let body = r#"{
        "status": "ok",
        "items": [
            {
                "title": "Victoria en Madrid",
                "link": "https://example.com/a",
                "pubDate": "2026-05-25 18:00:00",
                "thumbnail": "https://example.com/thumb.jpg",
                "description": "<p>Gran <b>remontada</b>   final.</p>",
                "author": "Redacción"
            }
        ]
    }"#;
    let items = parse_news_feed(body).expect("feed parses");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].thumbnail, "https://example.com/thumb.jpg");
    assert_eq!(items[0].description, "Gran remontada final.");
}

#[test]
fn missing_thumbnail_falls_back_to_the_inline_image() {
    let body = r#"{
        "status": "ok",
        "items": [
            {
                "title": "a",
                "thumbnail": "",
                "description": "<p>texto <img src=\"https://example.com/inline.jpg\"></p>"
            },
            {
                "title": "b",
                "thumbnail": "",
                "description": "solo texto"
            }
        ]
    }"#;
    let items = parse_news_feed(body).expect("feed parses");
    assert_eq!(items[0].thumbnail, "https://example.com/inline.jpg");
    assert_eq!(items[1].thumbnail, FALLBACK_THUMBNAIL);
}

#[test]
fn news_status_gate_rejects_error_payloads() {
    let err = parse_news_feed(r#"{"status": "error", "items": []}"#).expect_err("not ok");
    assert!(err.to_string().contains("error"));
}

#[tokio::test]
async fn news_http_errors_surface_as_status_strings() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/feed")
        .with_status(404)
        .create_async()
        .await;
    let client = reqwest::Client::new();
    let err = fetch_news(&client, &format!("{}/feed", server.url()))
        .await
        .expect_err("404 must fail");
    assert!(err.to_string().contains("HTTP 404"));
}

#[test]
fn photo_feed_parses_and_prefers_the_sized_urls() {
    let body = r#"{
        "stat": "ok",
        "photos": {
            "photo": [
                { "id": "1", "secret": "s1", "server": "65535", "title": "a",
                  "url_z": "https://live.staticflickr.com/65535/1_s1_z.jpg" },
                { "id": "2", "secret": "s2", "server": "65535", "title": "b" }
            ]
        }
    }"#;
    let photos = parse_photo_feed(body).expect("feed parses");
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].image_url(), "https://live.staticflickr.com/65535/1_s1_z.jpg");
    // Without sized extras the URL is composed from the record itself.
    assert_eq!(photos[1].image_url(), "https://live.staticflickr.com/65535/2_s2_z.jpg");
}

#[test]
fn photo_status_gate_rejects_failures() {
    let body = r#"{"stat": "fail", "code": 100, "message": "Invalid API Key"}"#;
    let err = parse_photo_feed(body).expect_err("not ok");
    assert!(err.to_string().contains("fail"));
}

#[tokio::test]
async fn photos_fetch_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest")
        .with_status(200)
        .with_body(r#"{"stat": "ok", "photos": {"photo": []}}"#)
        .create_async()
        .await;
    let client = reqwest::Client::new();
    let photos = fetch_photos(&client, &format!("{}/rest", server.url()))
        .await
        .expect("fetch succeeds");
    assert!(photos.is_empty());
}
