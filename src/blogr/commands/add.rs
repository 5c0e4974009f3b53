use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PostDraft;
use crate::posts::PostStore;
use crate::store::StorageAdapter;

pub fn run<S: StorageAdapter, C: Clock>(
    store: &mut PostStore<S, C>,
    draft: PostDraft,
) -> Result<CmdResult> {
    let post = store.add(draft)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Post added: {}", post.title)));
    Ok(result.with_affected_posts(vec![post]))
}
