//! One handler per route; each maps the request to a single repository call
//! and hands the result to the view engine or serializes it as JSON.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json, Redirect};
use serde::Deserialize;
use serde_json::{json, Value};

use quill_blog::{Comment, NewComment, PostDraft, PostEdit};

use crate::error::{ApiError, PageError};
use crate::extract::JsonOrForm;
use crate::state::AppState;
use crate::views::PostPage;

/// `GET /`
pub async fn index() -> Redirect {
    Redirect::to("/posts")
}

/// `GET /posts`
pub async fn list_posts(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let posts = state.posts.list_summaries().await?;
    Ok(Html(state.views.posts_list(&posts)))
}

/// `GET /new-post`
pub async fn new_post_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let authors = state.authors.all().await?;
    Ok(Html(state.views.new_post_form(&authors)))
}

/// Body of the create form. The form names the body field `content`.
#[derive(Debug, Deserialize)]
pub struct CreatePostForm {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
}

/// `POST /posts`
pub async fn create_post(
    State(state): State<AppState>,
    JsonOrForm(form): JsonOrForm<CreatePostForm>,
) -> Result<Redirect, PageError> {
    state
        .posts
        .create(PostDraft {
            title: form.title,
            summary: form.summary,
            body: form.content,
            author: form.author,
        })
        .await?;
    Ok(Redirect::to("/posts"))
}

/// `GET /posts/:id`
pub async fn post_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let post = state.posts.get(&id).await?;
    let page = PostPage::new(post);
    Ok(Html(state.views.post_detail(&page)))
}

/// `GET /posts/:id/edit`
pub async fn edit_post_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let post = state.posts.get_for_edit(&id).await?;
    Ok(Html(state.views.edit_post_form(&post)))
}

/// Body of the edit form.
#[derive(Debug, Deserialize)]
pub struct EditPostForm {
    pub title: String,
    pub summary: String,
    pub content: String,
}

/// `POST /posts/:id/edit`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(form): JsonOrForm<EditPostForm>,
) -> Result<Redirect, PageError> {
    state
        .posts
        .update(
            &id,
            PostEdit {
                title: form.title,
                summary: form.summary,
                body: form.content,
            },
        )
        .await?;
    Ok(Redirect::to("/posts"))
}

/// `POST /posts/:id/delete`
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    state.posts.delete(&id).await?;
    Ok(Redirect::to("/posts"))
}

/// `GET /posts/:id/comments` -- a post with no comments is `200 []`,
/// not a 404.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state.comments.list_for_post(&id).await?;
    Ok(Json(comments))
}

/// `POST /posts/:id/comments`
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(comment): JsonOrForm<NewComment>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.comments.add(&id, comment).await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "The comment was saved" })),
    ))
}
