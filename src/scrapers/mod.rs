pub mod cheezburger;

pub use cheezburger::CheezburgerScraper;
