use crate::domain::Listing;

/// The four headline numbers on the Data page. Means are kept as floats;
/// display rounding is a formatter concern.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_records: usize,
    pub missing_values: usize,
    pub mean_rating: Option<f64>,
    pub mean_price: Option<f64>,
}

impl SummaryStats {
    /// Rating is the only nullable column, so the missing-value count is the
    /// number of rows without one; those rows are excluded from the rating
    /// mean but still count toward the price mean.
    pub fn compute<'a>(rows: impl IntoIterator<Item = &'a Listing>) -> Self {
        let mut total_records = 0;
        let mut missing_values = 0;
        let mut rating_sum = 0.0;
        let mut rating_count = 0usize;
        let mut price_sum = 0.0;

        for row in rows {
            total_records += 1;
            price_sum += row.price;
            match row.rating {
                Some(rating) => {
                    rating_sum += rating;
                    rating_count += 1;
                }
                None => missing_values += 1,
            }
        }

        SummaryStats {
            total_records,
            missing_values,
            mean_rating: (rating_count > 0).then(|| rating_sum / rating_count as f64),
            mean_price: (total_records > 0).then(|| price_sum / total_records as f64),
        }
    }
}

/// "4.43"-style rating for the summary card.
pub fn format_rating(mean_rating: Option<f64>) -> String {
    match mean_rating {
        Some(rating) => format!("{:.2}", rating),
        None => "—".to_string(),
    }
}

/// Average price rendered the way the marketplace prints rubles: truncated
/// to an integer, thousands grouped with spaces ("12 345").
pub fn format_price(mean_price: Option<f64>) -> String {
    match mean_price {
        Some(price) => group_thousands(price as i64),
        None => "—".to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::{format_price, format_rating, SummaryStats};
    use crate::domain::Listing;

    fn listing(price: f64, rating: Option<f64>) -> Listing {
        Listing {
            title: "item".to_string(),
            price,
            rating,
            reviews: 5,
            link: "https://market.yandex.ru/product/1".to_string(),
            category: "Мышь".to_string(),
            price_category: None,
        }
    }

    #[test]
    fn null_rating_counts_as_missing_and_is_excluded_from_the_mean() {
        let rows = vec![
            listing(100.0, Some(4.0)),
            listing(200.0, None),
            listing(300.0, Some(5.0)),
        ];
        let stats = SummaryStats::compute(&rows);

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.missing_values, 1);
        assert_eq!(stats.mean_rating, Some(4.5));
        assert_eq!(stats.mean_price, Some(200.0));
    }

    #[test]
    fn empty_table_has_no_means() {
        let stats = SummaryStats::compute(&[]);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.mean_rating, None);
        assert_eq!(stats.mean_price, None);
        assert_eq!(format_rating(stats.mean_rating), "—");
        assert_eq!(format_price(stats.mean_price), "—");
    }

    #[test]
    fn price_truncates_and_groups_thousands_with_spaces() {
        assert_eq!(format_price(Some(12345.67)), "12 345");
        assert_eq!(format_price(Some(1234567.0)), "1 234 567");
        assert_eq!(format_price(Some(999.9)), "999");
    }

    #[test]
    fn rating_renders_two_decimals() {
        assert_eq!(format_rating(Some(4.456)), "4.46");
        assert_eq!(format_rating(Some(5.0)), "5.00");
    }
}
