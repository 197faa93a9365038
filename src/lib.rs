//! Locale-backed fake personal data generator.
//!
//! Produces plausible fake values for personal-identity attributes (names,
//! ages, professions, physical traits, contact info, views, identifiers)
//! for tests, anonymized datasets, and UI mockups. Values are illustrative,
//! not cryptographically random.
//!
//! # Example
//!
//! ```rust
//! use persona_gen::{Gender, Locale, Person};
//!
//! let mut person = Person::new(Locale::En)?;
//!
//! let name = person.full_name(Some(Gender::Female), false)?;
//! let email = person.email(None);
//! let age = person.age(16, 66);
//!
//! assert!(name.contains(' '));
//! assert!(email.contains('@'));
//! assert!((16..=66).contains(&age));
//! # Ok::<(), persona_gen::Error>(())
//! ```
//!
//! For reproducible output, supply a seeded RNG:
//!
//! ```rust
//! use persona_gen::{Locale, Person};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut person = Person::with_rng(Locale::En, StdRng::seed_from_u64(42))?;
//! let _ = person.occupation()?;
//! # Ok::<(), persona_gen::Error>(())
//! ```

pub mod constants;
pub mod data;
pub mod error;
pub mod locale;
pub mod mask;
pub mod person;

pub use data::{LocaleData, Table};
pub use error::{Error, Result};
pub use locale::{Gender, Locale, SocialNetwork, TitleType};
pub use mask::{fill_mask, UsernameTemplate};
pub use person::{MemoStore, Person};
