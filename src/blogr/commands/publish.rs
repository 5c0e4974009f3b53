use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::PostStore;
use crate::render;
use crate::store::StorageAdapter;

/// Renders the full listing page. Writing it anywhere is the caller's job.
pub fn run<S: StorageAdapter, C: Clock>(
    store: &PostStore<S, C>,
    site_title: &str,
) -> Result<CmdResult> {
    let body = render::render_listing(store.posts());
    let page = render::render_page(site_title, &body);

    let mut result = CmdResult::default().with_html(page);
    result.add_message(CmdMessage::info(format!(
        "Rendered {} post(s).",
        store.len()
    )));
    Ok(result)
}
