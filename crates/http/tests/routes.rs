//! End-to-end tests driving the router over a real socket.

use reqwest::{Client, StatusCode, redirect::Policy};
use tempfile::TempDir;
use webshelf_http::{AppState, create_router};
use webshelf_storage::Storage;

struct TestApp {
    base: String,
    client: Client,
    _temp_dir: TempDir,
}

impl TestApp {
    async fn spawn() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let static_dir = temp_dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("hello.txt"), "hello from static").unwrap();

        let storage = Storage::new(&temp_dir.path().join("webshelf.db")).unwrap();
        let router = create_router(AppState::new(storage), &static_dir);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = Client::builder().redirect(Policy::none()).build().unwrap();
        Self { base: format!("http://{addr}"), client, _temp_dir: temp_dir }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status();
        (status, resp.text().await.unwrap())
    }

    /// Add a book and return the id parsed out of the returned card.
    async fn add(&self, name: &str, url: &str, chapter: &str) -> String {
        let resp = self
            .client
            .post(self.url("/book/"))
            .form(&[("bookName", name), ("bookUrl", url), ("bookChapter", chapter)])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        extract_id(&resp.text().await.unwrap())
    }
}

fn extract_id(card: &str) -> String {
    let start = card.find("id=\"book-").unwrap() + "id=\"book-".len();
    card[start..].chars().take_while(char::is_ascii_digit).collect()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}

#[tokio::test]
async fn test_health_and_empty_index() {
    let app = TestApp::spawn().await;
    assert_eq!(app.get("/health").await, (StatusCode::OK, "ok".to_owned()));

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No books found."));
    assert!(body.contains("Nothing yet."));
}

#[tokio::test]
async fn test_add_returns_highlighted_card_and_refresh_signal() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/book/"))
        .form(&[
            ("bookName", "Mother of Learning"),
            ("bookUrl", "https://www.royalroad.com/fiction/21220"),
            ("bookChapter", "108"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("hx-trigger").unwrap(), "history-changed");
    let body = resp.text().await.unwrap();
    assert!(body.contains("color-emerald"));
    assert!(body.contains("Mother of Learning"));
    assert!(body.contains(r#"id="no-books" hx-swap-oob="delete""#));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_new_book_is_listed_first_and_logged() {
    let app = TestApp::spawn().await;
    app.add("Older Serial", "https://example.org/older", "3").await;
    app.add("Newer Serial", "https://www.royalroad.com/fiction/1", "1").await;

    let (_, index) = app.get("/").await;
    assert!(position(&index, "Newer Serial") < position(&index, "Older Serial"));
    assert!(index.contains("color-amber"));
    assert!(index.contains("color-slate"));

    let (status, full) = app.get("/updates/full").await;
    assert_eq!(status, StatusCode::OK);
    assert!(position(&full, "added Newer Serial") < position(&full, "added Older Serial"));
}

#[tokio::test]
async fn test_delete_then_lookup_is_not_found() {
    let app = TestApp::spawn().await;
    let id = app.add("Doomed", "https://example.org/doomed", "1").await;

    let resp = app.client.delete(app.url(&format!("/book/{id}/"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("hx-trigger").unwrap(), "history-changed");
    assert!(resp.text().await.unwrap().is_empty());

    let (status, _) = app.get(&format!("/book/{id}/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get(&format!("/book/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = app.client.delete(app.url(&format!("/book/{id}/"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, full) = app.get("/updates/full").await;
    assert!(position(&full, "deleted Doomed") < position(&full, "added Doomed"));
}

#[tokio::test]
async fn test_patch_redirects_and_skips_unchanged_edits() {
    let app = TestApp::spawn().await;
    let id = app.add("Pact", "https://pactwebserial.wordpress.com", "1.1").await;
    let path = format!("/book/{id}/");

    let patch = |chapter: &'static str| {
        app.client.patch(app.url(&path)).form(&[
            ("bookName", "Pact"),
            ("bookUrl", "https://pactwebserial.wordpress.com"),
            ("bookChapter", chapter),
        ])
    };

    let resp = patch("2.3").send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/");
    assert_eq!(resp.headers().get("hx-trigger").unwrap(), "history-changed");

    let resp = patch("2.3").send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, full) = app.get("/updates/full").await;
    assert_eq!(full.matches("edited Pact").count(), 1);

    let (_, form) = app.get(&format!("/book/{id}/edit")).await;
    assert!(form.contains(r#"name="bookChapter" value="2.3""#));
}

#[tokio::test]
async fn test_malformed_input_is_bad_request() {
    let app = TestApp::spawn().await;
    for path in ["/?page=abc", "/?page=0", "/?page=-1", "/book/abc/edit", "/book/0/", "/book/1x/edit"] {
        let (status, _) = app.get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
    }

    let resp = app
        .client
        .post(app.url("/book/"))
        .form(&[("bookName", "  "), ("bookUrl", "https://example.org"), ("bookChapter", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/book/999/edit").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // process keeps serving after rejected requests
    let (status, _) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_search_fragment() {
    let app = TestApp::spawn().await;
    app.add("Super Supportive", "https://www.royalroad.com/fiction/63759", "50").await;
    app.add("Worm", "https://parahumans.wordpress.com", "1.1").await;

    let (status, body) = app.get("/search/?q=SUPER").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Super Supportive"));
    assert!(!body.contains("Worm"));
    assert!(body.starts_with("<div id=\"book-list\""));

    let (_, body) = app.get("/search/?q=").await;
    assert!(body.contains("Super Supportive") && body.contains("Worm"));

    let (_, body) = app.get("/search/?q=nothing-matches").await;
    assert!(body.contains("No books found."));
}

#[tokio::test]
async fn test_index_pagination() {
    let app = TestApp::spawn().await;
    for i in 0..12 {
        app.add(&format!("Serial {i:02}"), "https://example.org", "1").await;
    }

    let (_, first) = app.get("/").await;
    assert_eq!(first.matches("<article").count(), 10);
    assert!(first.contains(r#"href="/?page=2""#));

    let (status, second) = app.get("/?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second.matches("<article").count(), 2);
    assert!(second.contains("Serial 00"));
    assert!(second.contains(r#"href="/?page=1""#));
    assert!(!second.contains("rel=\"next\""));

    let (status, third) = app.get("/?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(third.matches("<article").count(), 0);
}

#[tokio::test]
async fn test_recent_updates_are_capped() {
    let app = TestApp::spawn().await;
    for i in 0..7 {
        app.add(&format!("Serial {i}"), "https://example.org", "1").await;
    }

    let (_, recent) = app.get("/updates/").await;
    assert_eq!(recent.matches("<li><time>").count(), 5);
    let (_, full) = app.get("/updates/full").await;
    assert_eq!(full.matches("<li><time>").count(), 7);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/static/hello.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hello from static");
}
