//! The view seam.
//!
//! Handlers do not build HTML themselves; they hand repository results to a
//! [`ViewEngine`]. The engine is the "render template with data" collaborator
//! -- the bundled [`BasicViews`] produces small semantic pages, and a real
//! template stack can replace it behind the same trait.

use quill_blog::{Author, EditablePost, Post, PostSummary};
use quill_types::{display_date, wire_date, Locale};

/// View model for the post detail page: the post plus the two derived date
/// renderings. Comments are not part of the page; the browser fetches them
/// separately through the JSON API. The stored instant itself is never
/// mutated.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub post: Post,
    /// Long-form date for people, e.g. `Thursday, August 31, 2023`.
    pub display_date: String,
    /// Canonical UTC date for machines, e.g. `2023-08-31T12:30:45.000Z`.
    pub wire_date: String,
}

impl PostPage {
    pub fn new(post: Post) -> Self {
        let display_date = display_date(&post.date, Locale::en_US);
        let wire_date = wire_date(&post.date);
        Self {
            post,
            display_date,
            wire_date,
        }
    }
}

/// Renders repository results into full HTML pages.
pub trait ViewEngine: Send + Sync {
    fn posts_list(&self, posts: &[PostSummary]) -> String;
    fn new_post_form(&self, authors: &[Author]) -> String;
    fn post_detail(&self, page: &PostPage) -> String;
    fn edit_post_form(&self, post: &EditablePost) -> String;
    fn not_found(&self) -> String;
    fn rejection(&self, message: &str) -> String;
    fn internal_error(&self) -> String;
}

/// Minimal bundled view engine: semantic HTML, escaped interpolation, no
/// styling.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicViews;

impl ViewEngine for BasicViews {
    fn posts_list(&self, posts: &[PostSummary]) -> String {
        let mut items = String::new();
        for post in posts {
            items.push_str(&format!(
                "<li><article>\
                 <h2><a href=\"/posts/{id}\">{title}</a></h2>\
                 <p>{summary}</p>\
                 <address>{author}</address>\
                 </article></li>",
                id = post.id,
                title = escape(&post.title),
                summary = escape(&post.summary),
                author = escape(&post.author.name),
            ));
        }
        layout(
            "All Posts",
            &format!(
                "<h1>All Posts</h1>\
                 <a href=\"/new-post\">New Post</a>\
                 <ol id=\"posts-list\">{items}</ol>"
            ),
        )
    }

    fn new_post_form(&self, authors: &[Author]) -> String {
        let mut options = String::new();
        for author in authors {
            options.push_str(&format!(
                "<option value=\"{id}\">{name}</option>",
                id = author.id,
                name = escape(&author.name),
            ));
        }
        layout(
            "New Post",
            &format!(
                "<h1>New Post</h1>\
                 <form action=\"/posts\" method=\"POST\">\
                 <label for=\"title\">Title</label>\
                 <input type=\"text\" id=\"title\" name=\"title\">\
                 <label for=\"summary\">Summary</label>\
                 <input type=\"text\" id=\"summary\" name=\"summary\">\
                 <label for=\"content\">Content</label>\
                 <textarea id=\"content\" name=\"content\"></textarea>\
                 <label for=\"author\">Author</label>\
                 <select id=\"author\" name=\"author\">{options}</select>\
                 <button type=\"submit\">Create Post</button>\
                 </form>"
            ),
        )
    }

    fn post_detail(&self, page: &PostPage) -> String {
        layout(
            &page.post.title,
            &format!(
                "<article id=\"post-detail\">\
                 <h1>{title}</h1>\
                 <address>{author}</address>\
                 <time datetime=\"{wire}\">{display}</time>\
                 <p>{body}</p>\
                 </article>\
                 <section id=\"comments\" data-postid=\"{id}\">\
                 <p>No comments loaded yet.</p>\
                 </section>",
                title = escape(&page.post.title),
                author = escape(&page.post.author.name),
                wire = page.wire_date,
                display = page.display_date,
                body = escape(&page.post.body),
                id = page.post.id,
            ),
        )
    }

    fn edit_post_form(&self, post: &EditablePost) -> String {
        layout(
            "Edit Post",
            &format!(
                "<h1>Edit Post</h1>\
                 <form action=\"/posts/{id}/edit\" method=\"POST\">\
                 <label for=\"title\">Title</label>\
                 <input type=\"text\" id=\"title\" name=\"title\" value=\"{title}\">\
                 <label for=\"summary\">Summary</label>\
                 <input type=\"text\" id=\"summary\" name=\"summary\" value=\"{summary}\">\
                 <label for=\"content\">Content</label>\
                 <textarea id=\"content\" name=\"content\">{body}</textarea>\
                 <button type=\"submit\">Update Post</button>\
                 </form>\
                 <form action=\"/posts/{id}/delete\" method=\"POST\">\
                 <button type=\"submit\">Delete Post</button>\
                 </form>",
                id = post.id,
                title = escape(&post.title),
                summary = escape(&post.summary),
                body = escape(&post.body),
            ),
        )
    }

    fn not_found(&self) -> String {
        layout(
            "Not Found",
            "<h1>Page not found</h1><p><a href=\"/posts\">Back to all posts</a></p>",
        )
    }

    fn rejection(&self, message: &str) -> String {
        layout(
            "Invalid Input",
            &format!(
                "<h1>Invalid input</h1><p>{}</p><p><a href=\"/posts\">Back to all posts</a></p>",
                escape(message)
            ),
        )
    }

    fn internal_error(&self) -> String {
        layout(
            "Error",
            "<h1>Something went wrong</h1><p>Please try again later.</p>",
        )
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body>{body}</body>\
         </html>",
        title = escape(title),
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
