use std::path::Path;

use anyhow::Context;

use crate::domain::Listing;

/// Reads the collected table. The file carries the six scraped columns;
/// `price_category` is derived downstream and never stored.
pub fn load_listings(path: &Path) -> anyhow::Result<Vec<Listing>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open listings file {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let listing: Listing =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        rows.push(listing);
    }
    Ok(rows)
}

pub fn save_listings(path: &Path, rows: &[Listing]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create listings file {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_listings, save_listings};
    use crate::domain::Listing;

    #[test]
    fn round_trip_preserves_rows_and_missing_ratings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");

        let rows = vec![
            Listing {
                title: "Logitech G102".to_string(),
                price: 2990.0,
                rating: Some(4.8),
                reviews: 1069,
                link: "https://market.yandex.ru/product/1".to_string(),
                category: "Мышь".to_string(),
                price_category: None,
            },
            Listing {
                title: "No-name keyboard".to_string(),
                price: 790.0,
                rating: None,
                reviews: 3,
                link: "https://market.yandex.ru/product/2".to_string(),
                category: "Клавиатура".to_string(),
                price_category: None,
            },
        ];

        save_listings(&path, &rows).unwrap();
        let loaded = load_listings(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_listings(&dir.path().join("absent.csv")).is_err());
    }
}
