use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::render;
use crate::store::StorageAdapter;

/// The single-post view: `id` is the raw query value, compared textually
/// against stored ids. A missing or unmatched id renders the not-found page
/// rather than failing.
pub fn run<S: StorageAdapter, C: Clock>(
    store: &PostStore<S, C>,
    id: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let post = id.and_then(|id| store.find_by_id(id));
    match post {
        Some(post) => {
            let page = render::render_page(&post.title, &render::render_post(post));
            result.affected_posts.push(post.clone());
            result = result.with_html(page);
        }
        None => {
            let page = render::render_page("Post not found", &render::render_not_found());
            result.add_message(CmdMessage::warning(match id {
                Some(id) => format!("No post with id {}.", id),
                None => "No post id supplied.".to_string(),
            }));
            result = result.with_html(page);
        }
    }
    Ok(result)
}
