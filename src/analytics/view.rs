use std::cmp::Ordering;

use serde::Deserialize;

use crate::domain::Listing;

const DEFAULT_PAGE_SIZE: usize = 10;

/// State of the Data-page table controls, decoded straight from the query
/// string of `/api/data/view`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for TableQuery {
    fn default() -> Self {
        TableQuery {
            search: None,
            sort_by: None,
            descending: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Price,
    Rating,
    Reviews,
    Category,
    PriceCategory,
}

/// The filtered and sorted view the Data page is currently showing. Summary
/// cards and distribution charts recompute over `filtered` (every page of
/// it), the table body renders `page_rows`.
pub struct TableView<'a> {
    pub filtered: Vec<&'a Listing>,
    pub page: usize,
    pub page_count: usize,
    page_size: usize,
}

impl<'a> TableView<'a> {
    pub fn page_rows(&self) -> &[&'a Listing] {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start.min(end)..end]
    }
}

pub fn apply<'a>(rows: &'a [Listing], query: &TableQuery) -> TableView<'a> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut filtered: Vec<&Listing> = rows
        .iter()
        .filter(|row| match &needle {
            Some(needle) => {
                row.title.to_lowercase().contains(needle)
                    || row.category.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();

    if let Some(key) = query.sort_by {
        filtered.sort_by(|a, b| compare(a, b, key));
        if query.descending {
            filtered.reverse();
        }
    }

    let page_size = query.page_size.max(1);
    let page_count = filtered.len().div_ceil(page_size).max(1);
    let page = query.page.min(page_count - 1);

    TableView {
        filtered,
        page,
        page_count,
        page_size,
    }
}

fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Price => total_cmp(a.price, b.price),
        // Unrated rows sort below every rated one.
        SortKey::Rating => total_cmp(
            a.rating.unwrap_or(f64::NEG_INFINITY),
            b.rating.unwrap_or(f64::NEG_INFINITY),
        ),
        SortKey::Reviews => a.reviews.cmp(&b.reviews),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::PriceCategory => a.price_category.map(|q| q.as_str()).cmp(&b.price_category.map(|q| q.as_str())),
    }
}

fn total_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::{apply, SortKey, TableQuery};
    use crate::domain::Listing;

    fn listing(title: &str, category: &str, price: f64, rating: Option<f64>) -> Listing {
        Listing {
            title: title.to_string(),
            price,
            rating,
            reviews: 10,
            link: "https://market.yandex.ru/product/1".to_string(),
            category: category.to_string(),
            price_category: None,
        }
    }

    fn sample_table() -> Vec<Listing> {
        vec![
            listing("Logitech G102", "Мышь", 2990.0, Some(4.8)),
            listing("Razer Viper", "Мышь", 5490.0, Some(4.6)),
            listing("Keychron K2", "Клавиатура", 8990.0, None),
            listing("LG UltraGear", "Монитор", 25990.0, Some(4.7)),
        ]
    }

    #[test]
    fn search_matches_title_and_category_case_insensitively() {
        let rows = sample_table();

        let by_title = apply(
            &rows,
            &TableQuery {
                search: Some("logitech".to_string()),
                ..TableQuery::default()
            },
        );
        assert_eq!(by_title.filtered.len(), 1);
        assert_eq!(by_title.filtered[0].title, "Logitech G102");

        let by_category = apply(
            &rows,
            &TableQuery {
                search: Some("мышь".to_string()),
                ..TableQuery::default()
            },
        );
        assert_eq!(by_category.filtered.len(), 2);
    }

    #[test]
    fn sorting_by_price_descending() {
        let rows = sample_table();
        let view = apply(
            &rows,
            &TableQuery {
                sort_by: Some(SortKey::Price),
                descending: true,
                ..TableQuery::default()
            },
        );

        let prices: Vec<f64> = view.filtered.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![25990.0, 8990.0, 5490.0, 2990.0]);
    }

    #[test]
    fn unrated_rows_sort_last_on_descending_rating() {
        let rows = sample_table();
        let view = apply(
            &rows,
            &TableQuery {
                sort_by: Some(SortKey::Rating),
                descending: true,
                ..TableQuery::default()
            },
        );

        assert_eq!(view.filtered.last().unwrap().title, "Keychron K2");
    }

    #[test]
    fn pagination_slices_and_clamps() {
        let rows = sample_table();
        let view = apply(
            &rows,
            &TableQuery {
                page: 1,
                page_size: 3,
                ..TableQuery::default()
            },
        );
        assert_eq!(view.page_count, 2);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_rows().len(), 1);

        // A page index past the end clamps to the last page.
        let clamped = apply(
            &rows,
            &TableQuery {
                page: 99,
                page_size: 3,
                ..TableQuery::default()
            },
        );
        assert_eq!(clamped.page, 1);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let rows = sample_table();
        let view = apply(
            &rows,
            &TableQuery {
                search: Some("nothing matches this".to_string()),
                ..TableQuery::default()
            },
        );
        assert_eq!(view.page_count, 1);
        assert!(view.page_rows().is_empty());
    }
}
