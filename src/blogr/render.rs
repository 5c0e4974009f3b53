//! HTML projection of the post list.
//!
//! Pure string builders: every mutation re-renders the whole list, and every
//! interpolated value (titles, content and URLs alike) goes through
//! [`escape_html`] so stored text can never inject markup.

use crate::model::Post;
use crate::text::{escape_html, excerpt};

/// Character budget for the card excerpt.
pub const EXCERPT_BUDGET: usize = 320;

/// One `blog-card` fragment. `display_index` is the post's current position
/// in the list and tags the delete control.
pub fn render_card(post: &Post, display_index: usize) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"blog-card\">\n");
    if !post.image.is_empty() {
        html.push_str(&format!(
            "  <div class=\"blog-card-image\"><img src=\"{}\" alt=\"{}\"></div>\n",
            escape_html(&post.image),
            escape_html(&post.title),
        ));
    }
    html.push_str("  <div class=\"blog-card-body\">\n");
    html.push_str(&format!(
        "    <h3 class=\"blog-card-title\">{}</h3>\n",
        escape_html(&post.title),
    ));
    html.push_str(&format!(
        "    <p class=\"blog-card-excerpt\">{}</p>\n",
        escape_html(&excerpt(&post.content, EXCERPT_BUDGET)),
    ));
    html.push_str("    <div class=\"blog-card-footer\">\n");
    html.push_str(&format!(
        "      <a class=\"read-more\" href=\"{}\">Read more</a>\n",
        escape_html(&read_more_href(post)),
    ));
    html.push_str(&format!(
        "      <button class=\"delete-post\" data-index=\"{}\">Delete</button>\n",
        display_index,
    ));
    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</article>\n");
    html
}

/// The card link: the post's own detail page when it has one, otherwise the
/// generated single-post view keyed by id.
fn read_more_href(post: &Post) -> String {
    if post.detail_url.is_empty() {
        format!("post.html?id={}", post.id)
    } else {
        post.detail_url.clone()
    }
}

/// The full listing: all cards in store order inside the posts container.
pub fn render_listing(posts: &[Post]) -> String {
    let mut html = String::from("<div id=\"posts-container\">\n");
    if posts.is_empty() {
        html.push_str("  <p class=\"empty-state\">No posts yet.</p>\n");
    } else {
        for (index, post) in posts.iter().enumerate() {
            html.push_str(&render_card(post, index));
        }
    }
    html.push_str("</div>\n");
    html
}

/// The single-post view body.
pub fn render_post(post: &Post) -> String {
    let mut html = String::from("<article class=\"post-detail\">\n");
    html.push_str(&format!(
        "  <h1 class=\"post-title\">{}</h1>\n",
        escape_html(&post.title),
    ));
    if !post.image.is_empty() {
        html.push_str(&format!(
            "  <img class=\"post-image\" src=\"{}\" alt=\"{}\">\n",
            escape_html(&post.image),
            escape_html(&post.title),
        ));
    }
    html.push_str(&format!(
        "  <div class=\"post-content\"><p>{}</p></div>\n",
        escape_html(&post.content),
    ));
    html.push_str("</article>\n");
    html
}

/// Shown when no id was supplied or no post matches it.
pub fn render_not_found() -> String {
    String::from("<p class=\"post-not-found\">Post not found.</p>\n")
}

/// Wraps a body fragment in the shared page shell.
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>{}</title>\n  <link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n\
         <body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::post;

    #[test]
    fn card_escapes_title_and_content() {
        let mut p = post(1, r#"<b>"Bold" & brash</b>"#);
        p.content = "1 < 2 > 0".into();
        let html = render_card(&p, 0);
        assert!(html.contains("&lt;b&gt;&quot;Bold&quot; &amp; brash&lt;/b&gt;"));
        assert!(html.contains("1 &lt; 2 &gt; 0"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn card_escapes_urls() {
        let mut p = post(1, "A");
        p.detail_url = r#"x.html?a=1&b="2""#.into();
        let html = render_card(&p, 0);
        assert!(html.contains("href=\"x.html?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn card_without_image_omits_the_image_block() {
        let html = render_card(&post(1, "A"), 0);
        assert!(!html.contains("blog-card-image"));
    }

    #[test]
    fn card_link_falls_back_to_the_single_post_view() {
        let html = render_card(&post(41, "A"), 0);
        assert!(html.contains("href=\"post.html?id=41\""));

        let mut p = post(42, "B");
        p.detail_url = "posts/b.html".into();
        let html = render_card(&p, 0);
        assert!(html.contains("href=\"posts/b.html\""));
    }

    #[test]
    fn card_tags_the_delete_control_with_the_display_index() {
        let html = render_card(&post(1, "A"), 3);
        assert!(html.contains("data-index=\"3\""));
    }

    #[test]
    fn excerpt_is_cut_to_budget() {
        let mut p = post(1, "A");
        p.content = "x".repeat(EXCERPT_BUDGET + 50);
        let html = render_card(&p, 0);
        assert!(html.contains(&format!("{}…", "x".repeat(EXCERPT_BUDGET))));
        assert!(!html.contains(&"x".repeat(EXCERPT_BUDGET + 1)));
    }

    #[test]
    fn listing_renders_cards_in_store_order() {
        let html = render_listing(&[post(1, "First"), post(2, "Second")]);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("data-index=\"0\""));
        assert!(html.contains("data-index=\"1\""));
    }

    #[test]
    fn empty_listing_renders_the_empty_state() {
        let html = render_listing(&[]);
        assert!(html.contains("empty-state"));
        assert!(!html.contains("blog-card"));
    }

    #[test]
    fn single_post_view_escapes_everything() {
        let mut p = post(1, "<Title>");
        p.content = "a & b".into();
        let html = render_post(&p);
        assert!(html.contains("&lt;Title&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn page_shell_wraps_the_body() {
        let html = render_page("My & Blog", "<p>hi</p>\n");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My &amp; Blog</title>"));
        assert!(html.contains("<p>hi</p>"));
    }
}
