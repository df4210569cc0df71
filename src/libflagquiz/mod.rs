//! The flag quiz engine.
//!
//! A [`session::Session`] owns a [`catalog::Catalog`], a shuffled
//! [`queue::Queue`] of countries and the [`history::AnswerHistory`]. Front ends
//! call its methods on user input and render [`session::Session::current`].

use std::io;
use thiserror::Error;

pub mod catalog;
pub mod flash;
pub mod grading;
pub mod history;
pub mod normalize;
pub mod question;
pub mod queue;
pub mod random;
pub mod session;

pub use catalog::{Catalog, Continent, Country, CountryId, DrivingSide, Region};
pub use question::{AnswerOption, Question};
pub use session::{Feedback, Session, Settings};

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read catalog")]
    CatalogRead(#[from] io::Error),
    #[error("malformed catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
    #[error("catalog has no countries")]
    EmptyCatalog,
    #[error("country {0:?} appears more than once in the catalog")]
    DuplicateCountry(String),
    #[error("no country matches {0:?}")]
    UnknownEntry(String),
}
