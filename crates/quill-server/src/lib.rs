//! HTTP server for the Quill blog.
//!
//! Server-rendered pages for listing, creating, editing, and deleting posts,
//! plus a small JSON API the browser uses to load and add per-post comments
//! asynchronously. Every handler is one repository call; request handling is
//! cooperative, suspending at each store round trip.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::BlogServer;
pub use state::AppState;
pub use views::{BasicViews, PostPage, ViewEngine};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    use quill_blog::{NewAuthor, PostDraft};
    use quill_store::Database;
    use quill_types::DocumentId;

    /// A router over a fresh in-memory database seeded with one author.
    async fn test_app() -> (Router, AppState, DocumentId) {
        let db = Database::in_memory("blog");
        let state = AppState::new(db);
        state
            .authors
            .seed(&[NewAuthor {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }])
            .await
            .unwrap();
        let ada = state.authors.all().await.unwrap().remove(0).id;
        (build_router(state.clone()), state, ada)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_posts() {
        let (app, _, _) = test_app().await;
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/posts");
    }

    #[tokio::test]
    async fn posts_list_renders_when_empty() {
        let (app, _, _) = test_app().await;
        let response = app.oneshot(get("/posts")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("All Posts"));
    }

    #[tokio::test]
    async fn new_post_form_lists_the_seeded_author() {
        let (app, _, ada) = test_app().await;
        let response = app.oneshot(get("/new-post")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Ada"));
        assert!(body.contains(&ada.to_hex()));
    }

    #[tokio::test]
    async fn create_list_detail_round_trip() {
        let (app, state, ada) = test_app().await;

        // Create through the HTTP surface, as the form would.
        let form = format!(
            "title=Hello&summary=SummaryText&content=BodyText&author={}",
            ada.to_hex()
        );
        let response = app.clone().oneshot(post_form("/posts", &form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/posts");

        // The list view carries title and author name, but never the body.
        let response = app.clone().oneshot(get("/posts")).await.unwrap();
        let list = body_string(response).await;
        assert!(list.contains("Hello"));
        assert!(list.contains("Ada"));
        assert!(!list.contains("BodyText"));

        // The detail view carries the body, but never the summary.
        let id = state.posts.list_summaries().await.unwrap()[0].id;
        let response = app.oneshot(get(&format!("/posts/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail = body_string(response).await;
        assert!(detail.contains("BodyText"));
        assert!(!detail.contains("SummaryText"));
        assert!(detail.contains("datetime="));
    }

    #[tokio::test]
    async fn missing_post_renders_404_page() {
        let (app, _, _) = test_app().await;
        let id = DocumentId::generate();
        let response = app.oneshot(get(&format!("/posts/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn malformed_id_renders_404_page() {
        let (app, _, _) = test_app().await;
        let response = app
            .oneshot(get("/posts/definitely-not-an-id/edit"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_author_is_rejected_with_422() {
        let (app, _, _) = test_app().await;
        let form = format!(
            "title=T&summary=S&content=B&author={}",
            DocumentId::generate().to_hex()
        );
        let response = app.oneshot(post_form("/posts", &form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn edit_flow_updates_the_mutable_fields() {
        let (app, state, ada) = test_app().await;
        let id = state
            .posts
            .create(PostDraft {
                title: "Old".into(),
                summary: "S".into(),
                body: "B".into(),
                author: ada.to_hex(),
            })
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_form(
                &format!("/posts/{id}/edit"),
                "title=New&summary=S2&content=B2",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app.oneshot(get(&format!("/posts/{id}/edit"))).await.unwrap();
        let body = body_string(response).await;
        assert!(body.contains("value=\"New\""));
        assert!(body.contains(">B2</textarea>"));
    }

    #[tokio::test]
    async fn delete_flow_removes_the_post_but_not_its_comments() {
        let (app, state, ada) = test_app().await;
        let id = state
            .posts
            .create(PostDraft {
                title: "T".into(),
                summary: "S".into(),
                body: "B".into(),
                author: ada.to_hex(),
            })
            .await
            .unwrap();
        state
            .comments
            .add(
                &id.to_hex(),
                quill_blog::NewComment {
                    title: "re".into(),
                    text: "survives".into(),
                },
            )
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_form(&format!("/posts/{id}/delete"), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app.clone().oneshot(get(&format!("/posts/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The comment is orphaned, not removed.
        let response = app
            .oneshot(get(&format!("/posts/{id}/comments")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("survives"));
    }

    #[tokio::test]
    async fn comments_of_a_commentless_post_are_an_empty_array() {
        let (app, _, _) = test_app().await;
        let id = DocumentId::generate();
        let response = app
            .oneshot(get(&format!("/posts/{id}/comments")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn comment_accepts_json_and_form_bodies() {
        let (app, _, _) = test_app().await;
        let id = DocumentId::generate();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/posts/{id}/comments"),
                serde_json::json!({ "title": "re", "text": "from fetch" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("message"));

        let response = app
            .clone()
            .oneshot(post_form(
                &format!("/posts/{id}/comments"),
                "title=re&text=from+form",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get(&format!("/posts/{id}/comments")))
            .await
            .unwrap();
        let body = body_string(response).await;
        assert!(body.contains("from fetch"));
        assert!(body.contains("from form"));
    }
}
