//! HTML pages
//!
//! Pages are assembled from plain strings; every value that came from the
//! upstream API or the request goes through `escape_html`.

pub mod search_box;

use folio_core::{article_path, escape_html, ArticleDetail, ListedArticle};

pub use search_box::SearchBox;

/// Path the widget script is served under.
pub const SEARCH_CLEAR_SCRIPT_PATH: &str = "/static/search-clear.js";

/// Everything the list page shows.
#[derive(Debug, Clone)]
pub struct ListView {
    pub articles: Vec<ListedArticle>,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub search_term: Option<String>,
}

/// Link to list page `page`, keeping the search term.
pub fn page_link(page: u32, search: Option<&str>) -> String {
    match search.filter(|s| !s.is_empty()) {
        Some(term) => format!("/GetArticles/{page}?search={}", urlencoding::encode(term)),
        None => format!("/GetArticles/{page}"),
    }
}

fn layout(title: &str, search_term: Option<&str>, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/assets/style.css">
  <script src="{SEARCH_CLEAR_SCRIPT_PATH}" defer></script>
</head>
<body>
<header>
  <a class="home" href="/">Articles</a>
  {search}
</header>
<main>
{main}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        search = SearchBox::new(search_term).to_html(),
    )
}

pub fn list_page(view: &ListView) -> String {
    let search = view.search_term.as_deref();
    let mut main = String::new();

    if let Some(term) = search {
        main.push_str(&format!(
            "<h1>Results for &ldquo;{}&rdquo;</h1>\n",
            escape_html(term)
        ));
    } else {
        main.push_str("<h1>Latest articles</h1>\n");
    }

    if view.articles.is_empty() {
        main.push_str("<p class=\"empty\">No articles match your search.</p>\n");
    } else {
        main.push_str("<ol class=\"articles\">\n");
        for listed in &view.articles {
            let article = &listed.article;
            main.push_str(&format!(
                "  <li>\n    <a href=\"{href}\">{title}</a>\n    <span class=\"author\">{author}</span>\n",
                href = escape_html(&article_path(article.id, &listed.slug)),
                title = escape_html(&article.title),
                author = escape_html(&listed.short_author_name),
            ));
            if let Some(date) = &article.published_date {
                main.push_str(&format!(
                    "    <time>{}</time>\n",
                    escape_html(date)
                ));
            }
            if let Some(summary) = &article.summary {
                main.push_str(&format!("    <p>{}</p>\n", escape_html(summary)));
            }
            main.push_str("  </li>\n");
        }
        main.push_str("</ol>\n");
    }

    main.push_str(&pagination(view));

    let title = match search {
        Some(term) => format!("Search: {term}"),
        None => "Articles".to_string(),
    };
    layout(&title, search, &main)
}

fn pagination(view: &ListView) -> String {
    let search = view.search_term.as_deref();
    let mut nav = String::from("<nav class=\"pagination\">\n");

    if view.current_page > 1 {
        nav.push_str(&format!(
            "  <a rel=\"prev\" href=\"{}\">Previous</a>\n",
            escape_html(&page_link(view.current_page - 1, search))
        ));
    }
    nav.push_str(&format!(
        "  <span>Page {} of {} ({} per page)</span>\n",
        view.current_page, view.total_pages, view.page_size
    ));
    if view.current_page < view.total_pages {
        nav.push_str(&format!(
            "  <a rel=\"next\" href=\"{}\">Next</a>\n",
            escape_html(&page_link(view.current_page + 1, search))
        ));
    }

    nav.push_str("</nav>\n");
    nav
}

pub fn detail_page(article: &ArticleDetail, short_author: &str) -> String {
    let mut main = format!(
        "<article>\n<h1>{}</h1>\n<p class=\"byline\">By {}</p>\n",
        escape_html(&article.title),
        escape_html(short_author)
    );

    if let Some(date) = &article.published_date {
        main.push_str(&format!("<time>{}</time>\n", escape_html(date)));
    }

    if let Some(body) = &article.body {
        for paragraph in body.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            main.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
        }
    }

    main.push_str("</article>\n");
    layout(&article.title, None, &main)
}

pub fn error_page(message: &str) -> String {
    let main = format!("<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n", escape_html(message));
    layout("Error", None, &main)
}
