use crate::crawlers::crawler::PageSource;
use crate::error::Result;
use crate::parsers::Parser;
use crate::results::RunSummary;
use crate::store::LineStore;
use crate::utils;
use indicatif::{ProgressBar, ProgressStyle};

/// Fetches every item in order and appends one record per review found.
///
/// A skipped item costs nothing but its own records. An error from the
/// source or the store ends the pass; records already written stay.
pub async fn extract_reviews<S: PageSource>(
    source: &mut S,
    items: &[String],
    store: &mut LineStore,
) -> Result<RunSummary> {
    ::log::info!(
        "Extracting reviews from {} {} items",
        items.len(),
        source.name()
    );
    let progress = progress_bar(items.len());
    let mut summary = RunSummary {
        items: items.len(),
        ..RunSummary::default()
    };

    for item in items {
        progress.set_message(item.clone());
        let Some(html) = source.fetch(item).await? else {
            summary.skipped += 1;
            progress.inc(1);
            continue;
        };

        let records = Parser::parse_reviews(&html, item);
        for record in &records {
            store.append(record)?;
        }
        summary.emitted += records.len();
        ::log::debug!("Wrote {} records for {}", records.len(), item);
        progress.inc(1);
    }

    progress.finish_and_clear();
    ::log::info!(
        "{} now holds {} lines from this run",
        store.path().display(),
        store.written()
    );
    Ok(summary)
}

/// Resolves the full set of review pages behind each first page and
/// appends them, made absolute against `base_url`, one URL per line.
///
/// Pages without pagination controls are single-page hotels and add nothing.
pub async fn expand_pages<S: PageSource>(
    source: &mut S,
    items: &[String],
    base_url: &str,
    store: &mut LineStore,
) -> Result<RunSummary> {
    ::log::info!("Resolving review pages for {} first pages", items.len());
    let progress = progress_bar(items.len());
    let mut summary = RunSummary {
        items: items.len(),
        ..RunSummary::default()
    };

    for item in items {
        progress.set_message(item.clone());
        let Some(html) = source.fetch(item).await? else {
            summary.skipped += 1;
            progress.inc(1);
            continue;
        };

        match Parser::parse_review_pages(&html) {
            Some(urls) => {
                for url in &urls {
                    store.append_line(&utils::absolutize(base_url, url))?;
                }
                summary.emitted += urls.len();
                ::log::debug!("{} has {} further review pages", item, urls.len());
            }
            None => ::log::debug!("{} is the only review page", item),
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    ::log::info!(
        "{} now holds {} lines from this run",
        store.path().display(),
        store.written()
    );
    Ok(summary)
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvestError;
    use crate::store::WriteMode;
    use std::collections::HashMap;

    /// In-memory source; items mapped to `None` are skipped, `fail_on` stops the run
    struct FakeSource {
        pages: HashMap<String, Option<String>>,
        fail_on: Option<String>,
        fetched: Vec<String>,
    }

    impl PageSource for FakeSource {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn fetch(&mut self, item: &str) -> Result<Option<String>> {
            self.fetched.push(item.to_string());
            if self.fail_on.as_deref() == Some(item) {
                return Err(HarvestError::Config("driver gone".into()));
            }
            Ok(self.pages.get(item).cloned().flatten())
        }
    }

    fn review_box(name: &str) -> String {
        format!(
            r#"<div class="_2wrUUKlw _3hFEdNs8"><a class="ui_header_link _1r_My98y" href="/p/{name}">{name}</a></div>"#
        )
    }

    fn source(pages: &[(&str, Option<String>)], fail_on: Option<&str>) -> FakeSource {
        FakeSource {
            pages: pages
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            fail_on: fail_on.map(str::to_string),
            fetched: Vec::new(),
        }
    }

    fn items(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_skipped_items_do_not_stop_the_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut store = LineStore::open(&path, WriteMode::Truncate).unwrap();

        let two = format!("{}{}", review_box("a"), review_box("b"));
        let mut source = source(
            &[("p1", Some(two)), ("p2", None), ("p3", Some(review_box("c")))],
            None,
        );

        let summary = extract_reviews(&mut source, &items(&["p1", "p2", "p3"]), &mut store)
            .await
            .unwrap();
        assert_eq!(
            summary,
            RunSummary {
                items: 3,
                skipped: 1,
                emitted: 3
            }
        );

        let written = std::fs::read_to_string(&path).unwrap();
        let links = written
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["link"].clone())
            .collect::<Vec<_>>();
        assert_eq!(links, vec!["p1", "p1", "p3"]);
    }

    #[tokio::test]
    async fn test_driver_error_keeps_written_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut store = LineStore::open(&path, WriteMode::Truncate).unwrap();

        let mut source = source(
            &[("p1", Some(review_box("a"))), ("p3", Some(review_box("c")))],
            Some("p2"),
        );

        let result = extract_reviews(&mut source, &items(&["p1", "p2", "p3"]), &mut store).await;
        assert!(result.is_err());
        assert_eq!(source.fetched, items(&["p1", "p2"]));
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_expand_pages_writes_absolute_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.csv");
        let mut store = LineStore::open(&path, WriteMode::Truncate).unwrap();

        let first_page = r#"<a class="pageNum" href="/H-Reviews-or5-x.html">2</a>
            <a class="pageNum" href="/H-Reviews-or10-x.html">3</a>
            <a class="pageNum" href="/H-Reviews-or25-x.html">6</a>"#
            .to_string();
        let mut source = source(
            &[("hotel.html", Some(first_page)), ("single.html", Some(String::new()))],
            None,
        );

        let summary = expand_pages(
            &mut source,
            &items(&["hotel.html", "single.html"]),
            "https://www.tripadvisor.com",
            &mut store,
        )
        .await
        .unwrap();
        assert_eq!(summary.emitted, 5);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec![
                "https://www.tripadvisor.com/H-Reviews-or5-x.html",
                "https://www.tripadvisor.com/H-Reviews-or10-x.html",
                "https://www.tripadvisor.com/H-Reviews-or25-x.html",
                "https://www.tripadvisor.com/H-Reviews-or15-x.html",
                "https://www.tripadvisor.com/H-Reviews-or20-x.html",
            ]
        );
    }
}
