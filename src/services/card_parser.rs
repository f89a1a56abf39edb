use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::Listing;
use crate::services::normalizer::{normalize_number, NormalizeError};

// Class names from the marketplace search results markup. Brittle by nature:
// when the site ships a new frontend build these stop matching and every card
// is reported as skipped.
const CARD_SELECTOR: &str = "div._1H-VK";
const TITLE_SELECTOR: &str = "div.cia-cs._1pFpJ";
const PRICE_SELECTOR: &str = "span.ds-valueLine.DPiFo";
const RATING_SELECTOR: &str = "span.ds-rating__value";
const REVIEWS_SELECTOR: &str = "span.ds-text_lineClamp_1";
const LINK_SELECTOR: &str = r#"a[href^="/"]"#;

pub enum CardOutcome {
    Parsed(Listing),
    Skipped(CardSkip),
}

/// Why a listing card was dropped from the batch.
#[derive(Debug, thiserror::Error)]
pub enum CardSkip {
    #[error("card has no {0} element")]
    MissingElement(&'static str),
    #[error("card {field} value {raw:?} is not numeric: {source}")]
    BadNumber {
        field: &'static str,
        raw: String,
        source: NormalizeError,
    },
    #[error("card link {raw:?} does not resolve against the market url: {source}")]
    BadLink {
        raw: String,
        source: url::ParseError,
    },
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
    reviews: Selector,
    link: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        CardSelectors {
            card: Selector::parse(CARD_SELECTOR).unwrap(),
            title: Selector::parse(TITLE_SELECTOR).unwrap(),
            price: Selector::parse(PRICE_SELECTOR).unwrap(),
            rating: Selector::parse(RATING_SELECTOR).unwrap(),
            reviews: Selector::parse(REVIEWS_SELECTOR).unwrap(),
            link: Selector::parse(LINK_SELECTOR).unwrap(),
        }
    }
}

/// Parses a rendered search results page into one outcome per listing card.
/// A malformed card never aborts the batch; it becomes a `Skipped` entry
/// carrying the reason.
pub fn parse_listing_cards(html: &str, query: &str, base_url: &Url) -> Vec<CardOutcome> {
    let selectors = CardSelectors::new();
    let document = Html::parse_document(html);

    document
        .select(&selectors.card)
        .map(|card| extract_card(card, query, base_url, &selectors))
        .collect()
}

fn extract_card(
    card: ElementRef<'_>,
    query: &str,
    base_url: &Url,
    selectors: &CardSelectors,
) -> CardOutcome {
    let title = match element_text(card, &selectors.title) {
        Some(text) => text,
        None => return CardOutcome::Skipped(CardSkip::MissingElement("title")),
    };

    let price_raw = match element_text(card, &selectors.price) {
        Some(text) => text,
        None => return CardOutcome::Skipped(CardSkip::MissingElement("price")),
    };
    let price = match normalize_number(&price_raw) {
        Ok(value) => value,
        Err(source) => {
            return CardOutcome::Skipped(CardSkip::BadNumber {
                field: "price",
                raw: price_raw,
                source,
            })
        }
    };

    // The rating element must exist, but a non-numeric rating text is stored
    // as a missing value instead of dropping the card.
    let rating = match element_text(card, &selectors.rating) {
        Some(text) => normalize_number(&text).ok(),
        None => return CardOutcome::Skipped(CardSkip::MissingElement("rating")),
    };

    let reviews_raw = match element_text(card, &selectors.reviews) {
        Some(text) => text,
        None => return CardOutcome::Skipped(CardSkip::MissingElement("reviews")),
    };
    let reviews = match normalize_number(&reviews_raw) {
        Ok(value) => value as u32,
        Err(source) => {
            return CardOutcome::Skipped(CardSkip::BadNumber {
                field: "reviews",
                raw: reviews_raw,
                source,
            })
        }
    };

    let href = match card
        .select(&selectors.link)
        .find_map(|a| a.value().attr("href"))
    {
        Some(href) => href,
        None => return CardOutcome::Skipped(CardSkip::MissingElement("link")),
    };
    let link = match base_url.join(href) {
        Ok(url) => url.to_string(),
        Err(source) => {
            return CardOutcome::Skipped(CardSkip::BadLink {
                raw: href.to_string(),
                source,
            })
        }
    };

    CardOutcome::Parsed(Listing {
        title,
        price,
        rating,
        reviews,
        link,
        category: query.to_string(),
        price_category: None,
    })
}

fn element_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{parse_listing_cards, CardOutcome, CardSkip};

    fn card(title: &str, price: &str, rating: &str, reviews: &str, href: &str) -> String {
        format!(
            r#"<div class="_1H-VK">
                <div class="cia-cs _1pFpJ">{title}</div>
                <span class="ds-valueLine DPiFo">{price}</span>
                <span class="ds-rating__value">{rating}</span>
                <span class="ds-text ds-text_lineClamp_1 ds-text_color_text-secondary">{reviews}</span>
                <a href="{href}">card</a>
            </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    fn base() -> Url {
        Url::parse("https://market.yandex.ru").unwrap()
    }

    #[test]
    fn well_formed_cards_become_listings() {
        let html = page(&[
            card("Мышь Logitech", "2\u{2006}990 ₽", "4.8", "1\u{a0}069", "/product/1"),
            card("Мышь Razer", "5\u{2006}490 ₽", "4.5", "311", "/product/2"),
        ]);

        let outcomes = parse_listing_cards(&html, "Мышь", &base());
        assert_eq!(outcomes.len(), 2);

        let listings: Vec<_> = outcomes
            .into_iter()
            .filter_map(|o| match o {
                CardOutcome::Parsed(l) => Some(l),
                CardOutcome::Skipped(_) => None,
            })
            .collect();
        assert_eq!(listings.len(), 2);

        assert_eq!(listings[0].title, "Мышь Logitech");
        assert_eq!(listings[0].price, 2990.0);
        assert_eq!(listings[0].rating, Some(4.8));
        assert_eq!(listings[0].reviews, 1069);
        assert_eq!(listings[0].link, "https://market.yandex.ru/product/1");
        assert_eq!(listings[0].category, "Мышь");
        assert_eq!(listings[0].price_category, None);
    }

    #[test]
    fn malformed_cards_are_skipped_with_reasons() {
        let missing_title = r#"<div class="_1H-VK">
            <span class="ds-valueLine DPiFo">990 ₽</span>
            <span class="ds-rating__value">4.1</span>
            <span class="ds-text_lineClamp_1">12</span>
            <a href="/product/3">card</a>
        </div>"#
            .to_string();
        let bad_price = card("Клавиатура", "цена по запросу", "4.2", "48", "/product/4");
        let missing_link = r#"<div class="_1H-VK">
            <div class="cia-cs _1pFpJ">Монитор</div>
            <span class="ds-valueLine DPiFo">18 990 ₽</span>
            <span class="ds-rating__value">4.7</span>
            <span class="ds-text_lineClamp_1">205</span>
        </div>"#
            .to_string();
        let good = card("Мышь A4Tech", "790 ₽", "4.3", "57", "/product/5");

        let html = page(&[missing_title, bad_price, missing_link, good]);
        let outcomes = parse_listing_cards(&html, "Мышь", &base());
        assert_eq!(outcomes.len(), 4);

        let parsed = outcomes
            .iter()
            .filter(|o| matches!(o, CardOutcome::Parsed(_)))
            .count();
        assert_eq!(parsed, 1);

        let skips: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                CardOutcome::Skipped(reason) => Some(reason),
                CardOutcome::Parsed(_) => None,
            })
            .collect();
        assert!(matches!(skips[0], CardSkip::MissingElement("title")));
        assert!(matches!(
            skips[1],
            CardSkip::BadNumber { field: "price", .. }
        ));
        assert!(matches!(skips[2], CardSkip::MissingElement("link")));
    }

    #[test]
    fn unparseable_rating_is_kept_as_missing() {
        let html = page(&[card("Камера", "12\u{2006}990 ₽", "нет оценок", "3", "/product/6")]);
        let outcomes = parse_listing_cards(&html, "Камера", &base());

        match &outcomes[0] {
            CardOutcome::Parsed(listing) => assert_eq!(listing.rating, None),
            CardOutcome::Skipped(reason) => panic!("card should parse, got skip: {reason}"),
        }
    }

    #[test]
    fn absolute_links_resolve_from_relative_hrefs() {
        let html = page(&[card("Ноутбук", "54\u{2006}990 ₽", "4.9", "88", "/product--laptop/7")]);
        let outcomes = parse_listing_cards(&html, "Ноутбук", &base());

        match &outcomes[0] {
            CardOutcome::Parsed(listing) => {
                assert_eq!(listing.link, "https://market.yandex.ru/product--laptop/7")
            }
            CardOutcome::Skipped(reason) => panic!("card should parse, got skip: {reason}"),
        }
    }

    #[test]
    fn a_page_with_no_cards_yields_nothing() {
        let outcomes = parse_listing_cards("<html><body></body></html>", "Мышь", &base());
        assert!(outcomes.is_empty());
    }
}
