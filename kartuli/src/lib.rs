#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Georgian <-> Latin transliteration and URL-slug toolkit.
//!
//! The [`Romanizer`] pairs the 33-letter Mkhedruli alphabet with a
//! romanization scheme (the national scheme by default, or a custom one),
//! converts text in either direction one character at a time, and builds
//! ASCII-leaning URL slugs. Characters outside the active map never fail a
//! conversion; they resolve through an explicit [`Fallback`] policy.
//!
//! ```
//! use kartuli::{Romanizer, SlugOptions};
//!
//! let romanizer = Romanizer::national();
//! assert_eq!(romanizer.to_latin("მე მიყვარს ანი"), "me miyvars ani");
//!
//! let options = SlugOptions { transliterate: true, ..SlugOptions::default() };
//! assert_eq!(romanizer.slugify("ლაშა და ანა", &options), "lasha-da-ana");
//! ```

pub const KARTULI_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod loader;
pub mod scheme;
pub mod slug;
pub mod translit;

pub use error::Error;
pub use loader::load_scheme;
pub use scheme::Romanizer;
pub use slug::{SlugOptions, SlugTable};
pub use translit::{Direction, Fallback};
