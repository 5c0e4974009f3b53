use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageAdapter;
use crate::undo::UNDO_WINDOW_SECS;

/// Deletes by 0-based position. An out-of-range index is reported but is
/// not an error and changes nothing.
pub fn run<S: StorageAdapter, C: Clock>(
    store: &mut PostStore<S, C>,
    index: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete_at(index)? {
        Some(post) => {
            result.add_message(CmdMessage::success(format!("Post deleted: {}", post.title)));
            result.add_message(CmdMessage::info(format!(
                "Undo available for the next {} seconds.",
                UNDO_WINDOW_SECS
            )));
            result.affected_posts.push(post);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No post at position {}.", index + 1)));
        }
    }
    Ok(result)
}
