use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use blogly_api::{AppStateInner, router};
use blogly_db::Database;

fn app() -> Router {
    let db = Database::open_in_memory().unwrap();
    router(Arc::new(AppStateInner::new(db).unwrap()))
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

fn location(response: &Response) -> &str {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION].to_str().unwrap()
}

async fn body(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn page(app: &Router, uri: &str) -> String {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    body(response).await
}

#[tokio::test]
async fn root_redirects_to_users() {
    let app = app();

    assert_eq!(location(&get(&app, "/").await), "/users");
}

#[tokio::test]
async fn new_user_without_image_gets_placeholder() {
    let app = app();

    let created = post(&app, "/users", "first_name=Jane&last_name=Smith&image_url=").await;
    assert_eq!(location(&created), "/users/1");

    let html = page(&app, "/users/1").await;
    assert!(html.contains("Jane Smith"));
    assert!(html.contains("blank-profile-picture-973460_960_720.png"));

    let list = page(&app, "/users").await;
    assert!(list.contains("Jane Smith"));
}

#[tokio::test]
async fn blank_user_name_re_shows_form_with_bad_request() {
    let app = app();

    let response = post(&app, "/users", "first_name=&last_name=Smith").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body(response).await;
    assert!(html.contains("First name is required"));
    assert!(html.contains("value=\"Smith\""));

    assert!(page(&app, "/users").await.contains("No users yet."));
}

#[tokio::test]
async fn duplicate_tag_is_not_created() {
    let app = app();

    assert_eq!(location(&post(&app, "/tags", "tag_name=Cool").await), "/tags/1");
    assert_eq!(location(&post(&app, "/tags", "tag_name=Cool").await), "/tags");
    assert_eq!(location(&post(&app, "/tags", "tag_name=+++").await), "/tags");

    let html = page(&app, "/tags").await;
    assert_eq!(html.matches(">Cool</a>").count(), 1);
}

#[tokio::test]
async fn post_lives_under_its_author_only() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;
    post(&app, "/users", "first_name=Jane&last_name=Smith").await;

    let created = post(&app, "/users/2/new-post", "title=Secret+Plans&content=Shh").await;
    assert_eq!(location(&created), "/users/2/post/1/Secret%20Plans");

    let foreign = get(&app, "/users/1/post/1/Secret%20Plans").await;
    assert_eq!(location(&foreign), "/users");
    let foreign_edit = post(&app, "/users/1/post/1/x/edit", "title=Hijacked").await;
    assert_eq!(location(&foreign_edit), "/users");

    // The title segment is decoration; a stale one still resolves.
    let html = page(&app, "/users/2/post/1/old-title").await;
    assert!(html.contains("Secret Plans"));
    assert!(html.contains("Shh"));
}

#[tokio::test]
async fn post_page_shows_author_and_human_date() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;
    post(&app, "/users/1/new-post", "title=&content=").await;

    let html = page(&app, "/users/1/post/1/Untitled%20Post").await;

    assert!(html.contains("Untitled Post"));
    assert!(html.contains("John Doe"));
    let today = chrono::Utc::now().format("%B %d, %Y").to_string();
    assert!(html.contains(&today), "expected {} in post page", today);
}

#[tokio::test]
async fn editing_a_post_replaces_tags_and_moves_its_url() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;
    for name in ["Rusty", "Sunny", "Cloudy"] {
        post(&app, "/tags", &format!("tag_name={}", name)).await;
    }
    post(&app, "/users/1/new-post", "title=Weather&tag=Rusty&tag=Sunny&tag=Foggy").await;

    let form = page(&app, "/users/1/post/1/Weather/edit").await;
    assert!(form.contains("value=\"Rusty\" checked"));
    assert!(form.contains("value=\"Cloudy\">"));

    let edited = post(&app, "/users/1/post/1/Weather/edit", "title=Forecast&tag=Cloudy").await;
    assert_eq!(location(&edited), "/users/1/post/1/Forecast");

    let html = page(&app, "/users/1/post/1/Forecast").await;
    assert!(html.contains("Cloudy"));
    assert!(!html.contains("Rusty"));
    assert!(!html.contains("Sunny"));
    assert!(page(&app, "/tags/3").await.contains("Forecast"));
}

#[tokio::test]
async fn detail_actions_dispatch() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;

    assert_eq!(location(&post(&app, "/users/1", "ACTION=edit").await), "/users/1/edit");
    assert_eq!(location(&post(&app, "/users/1", "ACTION=new-post").await), "/users/1/new-post");
    assert_eq!(location(&post(&app, "/users/1", "ACTION=explode").await), "/users");
    assert_eq!(location(&post(&app, "/users/1", "").await), "/users");
    page(&app, "/users/1").await;

    post(&app, "/users/1/new-post", "title=Bye").await;
    let deleted = post(&app, "/users/1/post/1/Bye", "ACTION=delete").await;
    assert_eq!(location(&deleted), "/users/1");
    assert!(!page(&app, "/users/1").await.contains("Bye"));
}

#[tokio::test]
async fn deleting_a_user_removes_their_posts_but_not_tags() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;
    post(&app, "/tags", "tag_name=Cool").await;
    post(&app, "/users/1/new-post", "title=Doomed&tag=Cool").await;

    assert_eq!(location(&post(&app, "/users/1", "ACTION=delete").await), "/users");

    assert_eq!(location(&get(&app, "/users/1").await), "/users");
    assert_eq!(location(&get(&app, "/users/1/post/1/Doomed").await), "/users");
    let tag = page(&app, "/tags/1").await;
    assert!(tag.contains("Cool"));
    assert!(!tag.contains("Doomed"));
}

#[tokio::test]
async fn user_edit_overwrites_fields() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;

    let edited = post(&app, "/users/1/edit", "first_name=Walter&last_name=White&image_url=").await;
    assert_eq!(location(&edited), "/users/1");
    assert!(page(&app, "/users/1").await.contains("Walter White"));

    let rejected = post(&app, "/users/1/edit", "first_name=Walter&last_name=").await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert!(body(rejected).await.contains("Last name is required"));
}

#[tokio::test]
async fn tag_edit_flow() {
    let app = app();
    post(&app, "/tags", "tag_name=Cool").await;
    post(&app, "/tags", "tag_name=Fun").await;

    assert_eq!(location(&post(&app, "/tags/1", "ACTION=edit").await), "/tags/1/edit");
    assert_eq!(location(&post(&app, "/tags/1/edit", "tag_name=").await), "/tags/1/edit");
    assert_eq!(location(&post(&app, "/tags/1/edit", "tag_name=Chill").await), "/tags/1");
    assert!(page(&app, "/tags/1").await.contains("Chill"));

    // Renames are not checked against existing names; the unique index refuses.
    let clash = post(&app, "/tags/2/edit", "tag_name=Chill").await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);
    assert!(page(&app, "/tags/2").await.contains("Fun"));

    assert_eq!(location(&post(&app, "/tags/1", "ACTION=delete").await), "/tags");
    assert_eq!(location(&get(&app, "/tags/1").await), "/tags");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = app();

    assert_eq!(get(&app, "/nowhere").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&get(&app, "/users/42/edit").await), "/users");
}

/// A browser drops `.` and `..` path segments before sending, so no link or
/// redirect may contain one.
fn assert_no_dot_segments(uri: &str) {
    assert!(
        uri.split('/').all(|segment| segment != "." && segment != ".."),
        "{} contains a dot segment",
        uri
    );
}

#[tokio::test]
async fn posts_with_dot_or_slash_titles_stay_reachable() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;

    for (form_title, title) in [(".", "."), ("..", ".."), ("a%2Fb", "a/b")] {
        let created = post(&app, "/users/1/new-post", &format!("title={}", form_title)).await;
        let url = location(&created).to_string();
        assert_no_dot_segments(&url);

        let html = page(&app, &url).await;
        if title.starts_with('.') {
            assert!(html.contains(&format!("<h1>{}</h1>", title)));
        }

        let edit_url = format!("{}/edit", url);
        page(&app, &edit_url).await;
        let edited = post(&app, &edit_url, &format!("title={}&content=again", form_title)).await;
        assert_eq!(location(&edited), url);
    }
}

#[tokio::test]
async fn user_image_may_exceed_the_default_body_limit() {
    let app = app();
    post(&app, "/users", "first_name=John&last_name=Doe").await;
    let image = "A".repeat(3 * 1024 * 1024);

    let edited = post(
        &app,
        "/users/1/edit",
        &format!("first_name=John&last_name=Doe&image_url={}", image),
    )
    .await;

    assert_eq!(location(&edited), "/users/1");
    assert!(page(&app, "/users/1/edit").await.contains(&image));
}
