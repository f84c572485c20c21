//! End-to-end render tests: raw payload → snapshot → view → page model.

use std::sync::Mutex;

use scholar_profile::config::FallbackIdentity;
use scholar_profile::error::ClientError;
use scholar_profile::models::AuthorProfile;
use scholar_profile::observe::EventSink;
use scholar_profile::profile::normalize;
use scholar_profile::render::{Highlighter, PageModel, render_profile, render_view};
use scholar_profile::view::{Action, CategoryFilter, PublicationView};

#[derive(Debug, Default)]
struct RecordingSink {
    missing: Mutex<Vec<String>>,
}

impl EventSink for RecordingSink {
    fn refresh_failed(&self, _author_id: &str, _error: &ClientError) {}

    fn region_missing(&self, region: &str) {
        self.missing.lock().unwrap().push(region.to_string());
    }
}

fn sample_raw() -> AuthorProfile {
    serde_json::from_value(serde_json::json!({
        "name": "Niklas Bubeck",
        "affiliations": [{"name": "TUM"}],
        "paperCount": 7,
        "citationCount": 64,
        "hIndex": 4,
        "papers": [
            {
                "paperId": "p1",
                "title": "Deep vision models",
                "authors": [
                    {"authorId": "a0", "name": "Niklas Bubeck"},
                    {"authorId": "a1", "name": "Ada L."}
                ],
                "venue": "CVPR",
                "year": 2024,
                "citationCount": 40
            },
            {
                "paperId": "p2",
                "title": "Optimization notes",
                "authors": [{"authorId": "a1", "name": "Ada L."}],
                "venue": "arXiv",
                "year": 2023,
                "citationCount": 12
            },
            {
                "paperId": "p3",
                "title": "A journal study",
                "authors": [{"name": "Cy D."}],
                "venue": "Nature",
                "year": 2022,
                "citationCount": 12
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_full_pipeline_into_page_model() {
    let snapshot = normalize(&sample_raw(), &FallbackIdentity::default());

    let mut view = PublicationView::new();
    view.load(snapshot.publications.iter().cloned());

    let mut page = PageModel::default();
    let sink = RecordingSink::default();
    let highlighter = Highlighter::new(&snapshot.name);

    render_profile(&mut page, &snapshot, &sink);
    render_view(&mut page, &view.derive(), &highlighter, &sink);

    // Owner name mirrored into both name slots
    assert_eq!(page.owner_names, vec!["Niklas Bubeck", "Niklas Bubeck"]);
    assert_eq!(page.affiliation.as_deref(), Some("TUM"));

    // Stats carry labels and live values; i10 computed from the papers
    assert!(page.stats.contains(&("Total Citations".to_string(), 64)));
    assert!(page.stats.contains(&("i10-index".to_string(), 3)));
    assert!(page.stats.contains(&("Papers".to_string(), 7)));

    // All three records fit one page
    assert_eq!(page.publications.len(), 3);
    assert_eq!(page.results_count.as_deref(), Some("3 publications"));
    assert_eq!(page.pagination, Some((1, 1)));

    // Owner highlighted in the card's authors line
    assert_eq!(page.publications[0].authors, "**Niklas Bubeck**, Ada L.");

    // Coauthors exclude the owner
    assert_eq!(page.coauthors, vec!["Ada L. (2)", "Cy D. (1)"]);

    assert!(sink.missing.lock().unwrap().is_empty());
}

#[test]
fn test_narrowed_view_renders_count_of_total() {
    let snapshot = normalize(&sample_raw(), &FallbackIdentity::default());

    let mut view = PublicationView::new();
    view.load(snapshot.publications.iter().cloned());
    view.apply(Action::SetFilter(CategoryFilter::Preprint));

    let mut page = PageModel::default();
    let sink = RecordingSink::default();
    render_view(&mut page, &view.derive(), &Highlighter::new(&snapshot.name), &sink);

    assert_eq!(page.publications.len(), 1);
    assert_eq!(page.publications[0].title, "Optimization notes");
    assert_eq!(page.results_count.as_deref(), Some("1 of 3 publications"));
}

#[test]
fn test_missing_regions_are_skipped_independently() {
    let snapshot = normalize(&sample_raw(), &FallbackIdentity::default());

    let mut view = PublicationView::new();
    view.load(snapshot.publications.iter().cloned());

    let mut page = PageModel::default();
    page.disable("results-count");
    page.disable("coauthors");
    let sink = RecordingSink::default();

    render_profile(&mut page, &snapshot, &sink);
    render_view(&mut page, &view.derive(), &Highlighter::new(&snapshot.name), &sink);

    // Skipped regions stay empty, everything else rendered
    assert!(page.results_count.is_none());
    assert!(page.coauthors.is_empty());
    assert_eq!(page.publications.len(), 3);
    assert_eq!(page.owner_names.len(), 2);

    let missing = sink.missing.lock().unwrap();
    assert_eq!(*missing, vec!["coauthors", "results-count"]);
}
