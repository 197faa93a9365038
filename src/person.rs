//! Personal-attribute provider.
//!
//! One method per attribute category. Categorical methods draw uniformly
//! from the locale tables, numeric methods sample a range, and formatted
//! methods run the mask or username-template engine. A small per-instance
//! memo keeps dependent attributes (age, work experience) consistent.
//!
//! A `Person` owns its RNG and memo and is not safe for concurrent mutation
//! from multiple threads without external locking; the locale data behind it
//! is read-only and freely shared.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::constants::{
    AVATAR_HOST, BLOOD_GROUPS, DEFAULT_IDENTIFIER_MASK, DEFAULT_TELEPHONE_MASK, EMAIL_DOMAINS,
    ENGLISH_LEVELS, GENDER_SYMBOLS, ISO_5218_CODES, MUSIC_GENRES, PASSWORD_CHARS,
    SEXUALITY_SYMBOLS, USERNAME_WORDS,
};
use crate::data::LocaleData;
use crate::error::Result;
use crate::locale::{Gender, Locale, SocialNetwork, TitleType};
use crate::mask::{fill_mask, UsernameTemplate};

/// Default lower bound for [`Person::age`]
pub const DEFAULT_AGE_MIN: u32 = 16;
/// Default upper bound for [`Person::age`]
pub const DEFAULT_AGE_MAX: u32 = 66;
/// Default starting age for [`Person::work_experience`]
pub const DEFAULT_WORKING_START_AGE: u32 = 22;
/// Default upper bound for [`Person::child_count`]
pub const DEFAULT_MAX_CHILDREN: u32 = 5;

/// Cross-call memo for dependent attributes.
///
/// `age` starts at the sentinel `0` (no age generated yet). [`Person::age`]
/// overwrites it on every call; [`Person::work_experience`] reads it, sampling
/// a fresh age first when the sentinel is still present. Pre-seed it through
/// [`Person::memo_mut`] for deterministic tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStore {
    age: u32,
}

impl MemoStore {
    /// Last generated age, or `0` if none has been generated.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

/// Fake personal data provider backed by one locale.
pub struct Person<R: Rng = StdRng> {
    rng: R,
    data: &'static LocaleData,
    memo: MemoStore,
}

impl Person<StdRng> {
    /// Create a provider for `locale` with an OS-seeded RNG.
    pub fn new(locale: Locale) -> Result<Self> {
        Self::with_rng(locale, StdRng::from_os_rng())
    }
}

impl<R: Rng> Person<R> {
    /// Create a provider with a caller-supplied RNG (seed it for
    /// reproducible output).
    pub fn with_rng(locale: Locale, rng: R) -> Result<Self> {
        Ok(Self {
            rng,
            data: LocaleData::fetch(locale)?,
            memo: MemoStore::default(),
        })
    }

    pub fn locale(&self) -> Locale {
        self.data.locale()
    }

    pub fn memo(&self) -> &MemoStore {
        &self.memo
    }

    pub fn memo_mut(&mut self) -> &mut MemoStore {
        &mut self.memo
    }

    // ------------------------------------------------------------------
    // Numeric attributes
    // ------------------------------------------------------------------

    /// Generate an age in `[minimum, maximum]`.
    ///
    /// The sampled value is written to the memo on every call; the memo is
    /// never consulted here, so consecutive calls sample independently.
    pub fn age(&mut self, minimum: u32, maximum: u32) -> u32 {
        let age = self.rng.random_range(minimum..=maximum);
        self.memo.set_age(age);
        age
    }

    /// Years of work experience, derived from the memoized age.
    ///
    /// Samples a fresh age (default bounds) when no age has been generated
    /// yet. Never negative: clamped at 0 when `working_start_age` exceeds
    /// the age.
    pub fn work_experience(&mut self, working_start_age: u32) -> u32 {
        let age = match self.memo.age() {
            0 => self.age(DEFAULT_AGE_MIN, DEFAULT_AGE_MAX),
            age => age,
        };
        age.saturating_sub(working_start_age)
    }

    /// Number of children in `[0, max_children]`.
    pub fn child_count(&mut self, max_children: u32) -> u32 {
        self.rng.random_range(0..=max_children)
    }

    /// Weight in `[minimum, maximum]` kilograms.
    pub fn weight(&mut self, minimum: u32, maximum: u32) -> u32 {
        self.rng.random_range(minimum..=maximum)
    }

    /// Height in `[minimum, maximum]` meters, formatted with two decimals
    /// (e.g. `"1.75"`).
    pub fn height(&mut self, minimum: f64, maximum: f64) -> String {
        format!("{:.2}", self.rng.random_range(minimum..=maximum))
    }

    // ------------------------------------------------------------------
    // Categorical attributes
    // ------------------------------------------------------------------

    /// Generate a first name (random partition when `gender` is `None`).
    pub fn name(&mut self, gender: Option<Gender>) -> Result<String> {
        self.pick_from("names", gender)
    }

    /// Generate a surname. Some locales partition surnames by gender,
    /// others keep a flat list; the table shape decides.
    pub fn surname(&mut self, gender: Option<Gender>) -> Result<String> {
        self.pick_from("surnames", gender)
    }

    /// Generate a full name as `name surname`, or `surname name` when
    /// `reverse` is set. A random gender is fixed up front so both parts
    /// come from the same partition.
    pub fn full_name(&mut self, gender: Option<Gender>, reverse: bool) -> Result<String> {
        let gender = gender.unwrap_or_else(|| {
            if self.rng.random_bool(0.5) {
                Gender::Female
            } else {
                Gender::Male
            }
        });
        let name = self.name(Some(gender))?;
        let surname = self.surname(Some(gender))?;
        Ok(if reverse {
            format!("{} {}", surname, name)
        } else {
            format!("{} {}", name, surname)
        })
    }

    /// Generate an occupation.
    pub fn occupation(&mut self) -> Result<String> {
        self.pick_from("occupation", None)
    }

    pub fn university(&mut self) -> Result<String> {
        self.pick_from("university", None)
    }

    pub fn academic_degree(&mut self) -> Result<String> {
        self.pick_from("academic_degree", None)
    }

    pub fn language(&mut self) -> Result<String> {
        self.pick_from("language", None)
    }

    pub fn worldview(&mut self) -> Result<String> {
        self.pick_from("worldview", None)
    }

    pub fn views_on(&mut self) -> Result<String> {
        self.pick_from("views_on", None)
    }

    pub fn political_views(&mut self) -> Result<String> {
        self.pick_from("political_views", None)
    }

    /// Generate a nationality. Gender-partitioned in some locales and flat
    /// in others; for flat tables `gender` is accepted but ignored.
    pub fn nationality(&mut self, gender: Option<Gender>) -> Result<String> {
        self.pick_from("nationality", gender)
    }

    pub fn favorite_movie(&mut self) -> Result<String> {
        self.pick_from("favorite_movie", None)
    }

    /// Generate an honorific or academic title. Both axes default to a
    /// random choice when `None`.
    pub fn title(&mut self, gender: Option<Gender>, title_type: Option<TitleType>) -> Result<String> {
        let table = self.data.get("title")?;
        let items = table
            .branch(gender.map(|g| g.as_key()), &mut self.rng)
            .and_then(|node| node.branch(title_type.map(|tt| tt.as_key()), &mut self.rng))
            .and_then(|node| node.items())
            .filter(|items| !items.is_empty())
            .ok_or_else(|| self.lookup_error("title"))?;
        Ok(items[self.rng.random_range(0..items.len())].clone())
    }

    // ------------------------------------------------------------------
    // Constant-table attributes
    // ------------------------------------------------------------------

    pub fn favorite_music_genre(&mut self) -> &'static str {
        MUSIC_GENRES[self.rng.random_range(0..MUSIC_GENRES.len())]
    }

    /// Generate a blood type in `<type><Rh>` notation, e.g. `"O+"`.
    pub fn blood_type(&mut self) -> &'static str {
        BLOOD_GROUPS[self.rng.random_range(0..BLOOD_GROUPS.len())]
    }

    pub fn level_of_english(&mut self) -> &'static str {
        ENGLISH_LEVELS[self.rng.random_range(0..ENGLISH_LEVELS.len())]
    }

    /// Generate a gender word from the locale table.
    pub fn gender(&mut self) -> Result<String> {
        self.pick_from("gender", None)
    }

    /// Generate a gender glyph.
    pub fn gender_symbol(&mut self) -> &'static str {
        GENDER_SYMBOLS[self.rng.random_range(0..GENDER_SYMBOLS.len())]
    }

    /// Generate an ISO/IEC 5218 code: 0 = not known, 1 = male, 2 = female,
    /// 9 = not applicable.
    pub fn gender_code(&mut self) -> u8 {
        ISO_5218_CODES[self.rng.random_range(0..ISO_5218_CODES.len())]
    }

    pub fn sexual_orientation(&mut self) -> Result<String> {
        self.pick_from("sexuality", None)
    }

    pub fn sexual_orientation_symbol(&mut self) -> &'static str {
        SEXUALITY_SYMBOLS[self.rng.random_range(0..SEXUALITY_SYMBOLS.len())]
    }

    // ------------------------------------------------------------------
    // Formatted attributes
    // ------------------------------------------------------------------

    /// Generate an identifier from a mask (`#` = digit, `@` = letter).
    /// Default mask: `##-##/##`.
    pub fn identifier(&mut self, mask: Option<&str>) -> String {
        fill_mask(mask.unwrap_or(DEFAULT_IDENTIFIER_MASK), &mut self.rng)
    }

    /// Generate a telephone number from a mask. Literal characters (such as
    /// a `+5` prefix) pass through verbatim.
    pub fn telephone(&mut self, mask: Option<&str>) -> String {
        fill_mask(mask.unwrap_or(DEFAULT_TELEPHONE_MASK), &mut self.rng)
    }

    /// Generate a username from a template key (see
    /// [`UsernameTemplate`]). `None` selects the default template.
    pub fn username(&mut self, template: Option<&str>) -> Result<String> {
        let template = match template {
            Some(key) => key.parse::<UsernameTemplate>()?,
            None => UsernameTemplate::DEFAULT,
        };
        Ok(self.compose_username(template))
    }

    /// Generate an email address. The domain comes from `domains` when
    /// supplied (a leading `@` is tolerated), else from the built-in list.
    pub fn email(&mut self, domains: Option<&[&str]>) -> String {
        let local = self.compose_username(UsernameTemplate::LOWER_JOINED);
        let pool = match domains {
            Some(pool) if !pool.is_empty() => pool,
            _ => EMAIL_DOMAINS,
        };
        let domain = pool[self.rng.random_range(0..pool.len())].trim_start_matches('@');
        format!("{}@{}", local, domain)
    }

    /// Generate a password of exactly `length` printable characters, or a
    /// 32-character hex digest when `hashed` (ignoring `length`).
    pub fn password(&mut self, length: usize, hashed: bool) -> String {
        if hashed {
            self.hex_token()
        } else {
            (0..length)
                .map(|_| PASSWORD_CHARS[self.rng.random_range(0..PASSWORD_CHARS.len())] as char)
                .collect()
        }
    }

    /// Generate an avatar URL `<host>/<size>/<hash>.png`, where `<hash>` is
    /// a 32-character hex identifier.
    pub fn avatar(&mut self, size: u32) -> String {
        format!("{}/{}/{}.png", AVATAR_HOST, size, self.hex_token())
    }

    /// Generate a profile URL for a social network (random when `None`).
    pub fn social_media_profile(&mut self, site: Option<SocialNetwork>) -> String {
        let site = site.unwrap_or_else(|| {
            SocialNetwork::ALL[self.rng.random_range(0..SocialNetwork::ALL.len())]
        });
        let handle = self.compose_username(UsernameTemplate::LOWER_JOINED);
        site.url_template().replace("{}", &handle)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Uniform draw from a locale table, descending into a gender partition
    /// when the table is grouped.
    fn pick_from(&mut self, category: &str, gender: Option<Gender>) -> Result<String> {
        let table = self.data.get(category)?;
        let items = table
            .branch(gender.map(|g| g.as_key()), &mut self.rng)
            .and_then(|t| t.items())
            .filter(|items| !items.is_empty())
            .ok_or_else(|| self.lookup_error(category))?;
        Ok(items[self.rng.random_range(0..items.len())].clone())
    }

    fn lookup_error(&self, category: &str) -> crate::Error {
        crate::Error::DataLookup {
            category: category.to_string(),
            locale: self.data.locale().code(),
        }
    }

    /// Word segment(s), optional separator, trailing digits.
    fn compose_username(&mut self, template: UsernameTemplate) -> String {
        let mut out = String::new();
        for _ in 0..template.words {
            let word = USERNAME_WORDS[self.rng.random_range(0..USERNAME_WORDS.len())];
            if template.capitalized {
                out.push_str(&word[..1].to_uppercase());
                out.push_str(&word[1..]);
            } else {
                out.push_str(word);
            }
        }
        if let Some(sep) = template.separator {
            out.push(sep);
        }
        out.push_str(&self.rng.random_range(1..10_000u32).to_string());
        out
    }

    /// 32-character hex token (SHA-256 over fresh random bytes, truncated).
    fn hex_token(&mut self) -> String {
        let seed: [u8; 16] = self.rng.random();
        let mut hasher = Sha256::new();
        hasher.update(seed);
        let digest = hex::encode(hasher.finalize());
        digest[..32].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    fn person() -> Person<ChaCha8Rng> {
        Person::with_rng(Locale::En, ChaCha8Rng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_memo_starts_at_sentinel() {
        let p = person();
        assert_eq!(p.memo().age(), 0);
    }

    #[test]
    fn test_age_overwrites_memo_every_call() {
        let mut p = person();
        let first = p.age(16, 66);
        assert_eq!(p.memo().age(), first);
        let second = p.age(70, 80);
        assert_eq!(p.memo().age(), second);
    }

    #[test]
    fn test_work_experience_seeds_memo_once() {
        let mut p = person();
        let a = p.work_experience(DEFAULT_WORKING_START_AGE);
        let b = p.work_experience(DEFAULT_WORKING_START_AGE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_work_experience_uses_preseeded_memo() {
        let mut p = person();
        p.memo_mut().set_age(30);
        assert_eq!(p.work_experience(22), 8);
        assert_eq!(p.work_experience(0), 30);
    }

    #[test]
    fn test_work_experience_never_negative() {
        let mut p = person();
        assert_eq!(p.work_experience(100_000), 0);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut a = person();
        let mut b = person();
        assert_eq!(a.full_name(None, false).unwrap(), b.full_name(None, false).unwrap());
        assert_eq!(a.identifier(None), b.identifier(None));
        assert_eq!(a.email(None), b.email(None));
    }

    #[test]
    fn test_hex_token_shape() {
        let mut p = person();
        let token = p.hex_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_username_capitalized_two_words() {
        let mut p = person();
        let result = p.username(Some("UU-d")).unwrap();
        let (words, digits) = result.split_once('-').unwrap();
        assert!(words.chars().next().unwrap().is_ascii_uppercase());
        assert!(words.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
