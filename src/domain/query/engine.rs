use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::LazyLock;

use super::state::{QueryState, SortBy, SortDirection};
use crate::domain::access::SPONSORED_CATEGORY;
use crate::domain::resource::Resource;

/// Lowercased, whitespace-split search terms. An empty set matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    pub fn parse(query: &str) -> Self {
        Self(
            query
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every term must appear somewhere in the resource's searchable text
    pub fn matches(&self, resource: &Resource) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let haystack = searchable_text(resource);
        self.0.iter().all(|term| haystack.contains(term.as_str()))
    }
}

fn searchable_text(resource: &Resource) -> String {
    let mut parts: Vec<&str> = vec![
        &resource.title,
        &resource.description,
        &resource.category,
        &resource.source,
    ];
    parts.extend(resource.tags.iter().map(String::as_str));
    parts.join("\n").to_lowercase()
}

/// Exact, case-sensitive category match. Selecting the sponsored category
/// matches sponsored-tier resources instead of the literal category value.
pub fn matches_category(resource: &Resource, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(SPONSORED_CATEGORY) => resource.is_sponsored_tier(),
        Some(category) => resource.category == category,
    }
}

/// Filters then stably sorts `collection` according to `query`.
///
/// Pure and deterministic: the same collection and query always produce the
/// same order, and records that compare equal keep their collection order.
pub fn compute_visible<'a>(collection: &'a [Resource], query: &QueryState) -> Vec<&'a Resource> {
    let terms = SearchTerms::parse(query.search_query());
    let category = query.selected_category();

    let mut visible: Vec<&Resource> = collection
        .iter()
        .filter(|r| matches_category(r, category) && terms.matches(r))
        .collect();

    sort_resources(&mut visible, query.sort_by(), query.sort_direction());
    visible
}

pub fn sort_resources(resources: &mut [&Resource], sort_by: SortBy, direction: SortDirection) {
    resources.sort_by(|a, b| compare_resources(a, b, sort_by, direction));
}

/// One typed accessor per sort key
pub fn compare_resources(
    a: &Resource,
    b: &Resource,
    sort_by: SortBy,
    direction: SortDirection,
) -> Ordering {
    match sort_by {
        SortBy::DateAdded => {
            compare_keys(Some(&a.date_added), Some(&b.date_added), direction, Ord::cmp)
        }
        SortBy::Rating => compare_keys(a.rating, b.rating, direction, f64::total_cmp),
        SortBy::Title => compare_keys(
            Some(a.title.as_str()),
            Some(b.title.as_str()),
            direction,
            |x: &&str, y: &&str| compare_titles(x, y),
        ),
        SortBy::Visits => compare_keys(a.visits, b.visits, direction, Ord::cmp),
        SortBy::Clicks => compare_keys(a.clicks, b.clicks, direction, Ord::cmp),
    }
}

/// Missing keys rank after present ones in both directions
fn compare_keys<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Descending => cmp(&y, &x),
            SortDirection::Ascending => cmp(&x, &y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Root-locale collator shared by every title sort
static TITLE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| tracing::error!(error = %e, "Title collator unavailable"))
        .ok()
});

fn compare_titles(a: &str, b: &str) -> Ordering {
    let collated = match TITLE_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    collated.then_with(|| a.cmp(b))
}
