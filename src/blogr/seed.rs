//! First-run extraction of posts out of pre-rendered markup.
//!
//! Runs only when storage has never been written (see
//! [`crate::posts::PostStore::hydrate`]): persisted data always wins over
//! markup, including an explicitly persisted empty list.

use crate::clock::Clock;
use crate::model::Post;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Container the cards are scanned from. Markup without it seeds nothing.
const CONTAINER_ID: &str = "posts-container";

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(&format!("#{}", CONTAINER_ID)).unwrap());
static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse(".blog-card").unwrap());
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2, h3, h4").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Derives one [`Post`] per `.blog-card` inside the posts container.
///
/// Ids are the clock's current milliseconds plus the card's position, so one
/// extraction pass never collides with itself even within a millisecond.
pub fn extract_posts<C: Clock>(html: &str, clock: &C) -> Vec<Post> {
    let document = Html::parse_document(html);
    let container = match document.select(&CONTAINER).next() {
        Some(container) => container,
        None => return Vec::new(),
    };

    let base = clock.now().timestamp_millis();
    container
        .select(&CARD)
        .enumerate()
        .map(|(position, card)| extract_card(card, base, position))
        .collect()
}

fn extract_card(card: ElementRef, base: i64, position: usize) -> Post {
    let image = card
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    let title = card
        .select(&HEADING)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("Post {}", position + 1));

    let content = card
        .select(&PARAGRAPH)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let detail_url = card
        .select(&ANCHOR)
        .find(|a| is_read_more(a))
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    Post {
        id: base + position as i64,
        title,
        image,
        content,
        detail_url,
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// A link counts as the read-more link when its visible text contains
/// "read" (case-insensitive) or it carries the `read-more` class.
fn is_read_more(anchor: &ElementRef) -> bool {
    if anchor.value().classes().any(|class| class == "read-more") {
        return true;
    }
    anchor
        .text()
        .collect::<String>()
        .to_lowercase()
        .contains("read")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;

    const BASE_MS: i64 = 1_700_000_000_000;

    fn extract(html: &str) -> Vec<Post> {
        extract_posts(html, &ManualClock::at(BASE_MS))
    }

    #[test]
    fn extracts_a_full_card() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card">
                <img src="img/one.png" alt="">
                <h3>First Post</h3>
                <p>  Some intro text.  </p>
                <a href="about.html">About</a>
                <a href="posts/one.html">Read more</a>
              </article>
            </div>"##,
        );

        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, BASE_MS);
        assert_eq!(post.title, "First Post");
        assert_eq!(post.image, "img/one.png");
        assert_eq!(post.content, "Some intro text.");
        assert_eq!(post.detail_url, "posts/one.html");
    }

    #[test]
    fn missing_pieces_fall_back() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card"></article>
              <article class="blog-card"><h2>   </h2></article>
            </div>"##,
        );

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Post 1");
        assert_eq!(posts[1].title, "Post 2"); // blank heading counts as absent
        assert_eq!(posts[0].image, "");
        assert_eq!(posts[0].content, "");
        assert_eq!(posts[0].detail_url, "");
    }

    #[test]
    fn read_more_matches_text_case_insensitively() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card">
                <a href="skip.html">Elsewhere</a>
                <a href="posts/x.html">READ ON</a>
              </article>
            </div>"##,
        );
        assert_eq!(posts[0].detail_url, "posts/x.html");
    }

    #[test]
    fn read_more_matches_marker_class() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card">
                <a class="read-more" href="posts/y.html">Continue</a>
              </article>
            </div>"##,
        );
        assert_eq!(posts[0].detail_url, "posts/y.html");
    }

    #[test]
    fn first_heading_of_any_level_wins() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card"><h4>Deep</h4><h1>Late</h1></article>
            </div>"##,
        );
        assert_eq!(posts[0].title, "Deep");
    }

    #[test]
    fn ids_are_unique_within_one_pass() {
        let posts = extract(
            r##"<div id="posts-container">
              <article class="blog-card"><h3>A</h3></article>
              <article class="blog-card"><h3>B</h3></article>
              <article class="blog-card"><h3>C</h3></article>
            </div>"##,
        );
        assert_eq!(
            posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![BASE_MS, BASE_MS + 1, BASE_MS + 2]
        );
    }

    #[test]
    fn empty_container_yields_empty_list() {
        assert!(extract(r#"<div id="posts-container"></div>"#).is_empty());
    }

    #[test]
    fn missing_container_yields_empty_list() {
        assert!(extract("<div class=\"elsewhere\"></div>").is_empty());
    }

    #[test]
    fn cards_outside_the_container_are_ignored() {
        let posts = extract(
            r##"<article class="blog-card"><h3>Stray</h3></article>
            <div id="posts-container">
              <article class="blog-card"><h3>Inside</h3></article>
            </div>"##,
        );
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Inside");
    }
}
