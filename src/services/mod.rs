pub mod card_parser;
pub mod droid;
pub mod market_scraper;
pub mod normalizer;

pub use card_parser::*;
pub use droid::*;
pub use market_scraper::*;
pub use normalizer::*;
