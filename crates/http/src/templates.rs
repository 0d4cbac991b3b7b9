//! HTML rendering for pages and htmx fragments.
//!
//! Pure presentation: every function takes already-loaded data and returns
//! markup. All user-supplied text goes through [`escape`].

use std::fmt::Write as _;

use webshelf_core::timestamp::format_timestamp;
use webshelf_core::{Book, ColorTag, HistoryEntry, Page};

use crate::HISTORY_CHANGED_EVENT;

/// Page shell; `{{body}}` is replaced with the rendered content.
const LAYOUT_HTML: &str = include_str!("layout.html");

/// Data for the full index page.
#[derive(Debug)]
pub struct IndexView<'a> {
    pub books: &'a [Book],
    pub history: &'a [HistoryEntry],
    pub page: Page,
    pub has_next: bool,
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) links are rendered as clickable.
fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim_start().to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then(|| escape(url))
}

#[must_use]
pub fn index_page(view: &IndexView<'_>) -> String {
    let mut body = String::new();
    body.push_str(&add_form());
    body.push_str(&search_box());
    body.push_str(&book_list(view.books));
    body.push_str(&pagination(view.page, view.has_next));
    body.push_str(&recent_history(view.history));
    LAYOUT_HTML.replace("{{body}}", &body)
}

fn add_form() -> String {
    r##"<form id="add-book" class="add-book" hx-post="/book/" hx-target="#book-list" hx-swap="afterbegin" hx-on::after-request="if (event.detail.successful) this.reset()">
    <input name="bookName" placeholder="Name" required>
    <input name="bookUrl" type="url" placeholder="https://..." required>
    <input name="bookChapter" placeholder="Chapter">
    <button type="submit">Add</button>
</form>
"##
    .to_owned()
}

fn search_box() -> String {
    r##"<input id="search" type="search" name="q" placeholder="Search by name" hx-get="/search/" hx-trigger="input changed delay:300ms, search" hx-target="#book-list" hx-swap="outerHTML">
"##
    .to_owned()
}

fn pagination(page: Page, has_next: bool) -> String {
    let mut nav = String::from(r#"<nav class="pagination">"#);
    if let Some(prev) = page.prev() {
        let _ = write!(nav, r#"<a href="/?page={prev}" rel="prev">Previous</a>"#);
    }
    let _ = write!(nav, r#"<span class="page">Page {page}</span>"#);
    if let Some(next) = page.next().filter(|_| has_next) {
        let _ = write!(nav, r#"<a href="/?page={next}" rel="next">Next</a>"#);
    }
    nav.push_str("</nav>\n");
    nav
}

/// The `#book-list` container; also the search response.
#[must_use]
pub fn book_list(books: &[Book]) -> String {
    let mut out = String::from("<div id=\"book-list\" class=\"book-list\">\n");
    if books.is_empty() {
        out.push_str("<p id=\"no-books\" class=\"empty\">No books found.</p>\n");
    }
    for book in books {
        out.push_str(&book_card(book, book.color()));
    }
    out.push_str("</div>\n");
    out
}

/// One book card, tagged with `color`.
#[must_use]
pub fn book_card(book: &Book, color: ColorTag) -> String {
    let id = book.id;
    let name = escape(book.name());
    let title = match safe_href(book.url()) {
        Some(href) => format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{name}</a>"#),
        None => name.clone(),
    };
    format!(
        r##"<article id="book-{id}" class="book color-{color}">
    <h3>{title}</h3>
    <p class="chapter">Chapter {chapter}</p>
    <p class="dates">Updated {updated}</p>
    <div class="actions">
        <button hx-get="/book/{id}/edit" hx-target="#book-{id}" hx-swap="outerHTML">Edit</button>
        <button hx-delete="/book/{id}/" hx-target="#book-{id}" hx-swap="outerHTML" hx-confirm="Delete {name}?">Delete</button>
    </div>
</article>
"##,
        chapter = escape(book.current_chapter()),
        updated = format_timestamp(&book.date_updated),
    )
}

/// Response to an add: the highlighted card, plus an out-of-band removal of
/// the empty-list placeholder in case this is the first book.
#[must_use]
pub fn added_card(book: &Book) -> String {
    let mut out = book_card(book, ColorTag::JUST_ADDED);
    out.push_str(r#"<p id="no-books" hx-swap-oob="delete"></p>"#);
    out.push('\n');
    out
}

/// Inline edit form replacing a card. Submits with PATCH; the redirect
/// reloads the whole list.
#[must_use]
pub fn edit_form(book: &Book) -> String {
    let id = book.id;
    format!(
        r##"<form id="book-{id}" class="book editing" hx-patch="/book/{id}/" hx-target="body">
    <input name="bookName" value="{name}" required>
    <input name="bookUrl" type="url" value="{url}" required>
    <input name="bookChapter" value="{chapter}">
    <button type="submit">Save</button>
    <button type="button" hx-get="/book/{id}/" hx-target="#book-{id}" hx-swap="outerHTML">Cancel</button>
</form>
"##,
        name = escape(book.name()),
        url = escape(book.url()),
        chapter = escape(book.current_chapter()),
    )
}

fn history_panel(entries: &[HistoryEntry], source: &str, toggle: (&str, &str), heading: &str) -> String {
    let (toggle_url, toggle_label) = toggle;
    let mut out = format!(
        r#"<section id="history" class="history" hx-get="{source}" hx-trigger="{HISTORY_CHANGED_EVENT} from:body" hx-swap="outerHTML">
    <h2>{heading}</h2>
    <ul>
"#
    );
    if entries.is_empty() {
        out.push_str("        <li class=\"empty\">Nothing yet.</li>\n");
    }
    for entry in entries {
        let _ = writeln!(
            out,
            r#"        <li><time>{}</time> {}</li>"#,
            format_timestamp(&entry.date),
            escape(&entry.action)
        );
    }
    let _ = write!(
        out,
        r##"    </ul>
    <button hx-get="{toggle_url}" hx-target="#history" hx-swap="outerHTML">{toggle_label}</button>
</section>
"##
    );
    out
}

/// Compact activity panel.
#[must_use]
pub fn recent_history(entries: &[HistoryEntry]) -> String {
    history_panel(entries, "/updates/", ("/updates/full", "Show all"), "Recent activity")
}

/// Full activity log, same panel id so it swaps in place.
#[must_use]
pub fn full_history(entries: &[HistoryEntry]) -> String {
    history_panel(entries, "/updates/full", ("/updates/", "Show less"), "All activity")
}
