use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageAdapter;

pub fn run<S: StorageAdapter, C: Clock>(store: &mut PostStore<S, C>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.restore()? {
        Some(post) => {
            result.add_message(CmdMessage::success(format!("Post restored: {}", post.title)));
            result.affected_posts.push(post);
        }
        None => {
            result.add_message(CmdMessage::warning("Nothing to undo."));
        }
    }
    Ok(result)
}
