//! Locale-independent constant tables.
//!
//! Closed sets shared by every locale: blood groups, music genres, English
//! proficiency levels, symbol maps, and the word/domain pools used by the
//! formatted generators.

/// Blood groups in `<type><Rh>` notation
pub const BLOOD_GROUPS: &[&str] = &["O+", "O-", "A+", "A-", "B+", "B-", "AB+", "AB-"];

/// Music genres
pub const MUSIC_GENRES: &[&str] = &[
    "Ambient",
    "Blues",
    "Classical",
    "Country",
    "Disco",
    "Drum and bass",
    "Electronic",
    "Folk",
    "Funk",
    "Hip hop",
    "House",
    "Jazz",
    "Metal",
    "Pop",
    "Reggae",
    "Rock",
    "Soul",
    "Techno",
];

/// CEFR-style English proficiency levels
pub const ENGLISH_LEVELS: &[&str] = &[
    "Beginner",
    "Elementary",
    "Pre-Intermediate",
    "Intermediate",
    "Upper Intermediate",
    "Advanced",
    "Proficiency",
];

/// Gender glyphs
pub const GENDER_SYMBOLS: &[&str] = &["\u{2642}", "\u{2640}", "\u{26b2}"];

/// ISO/IEC 5218 codes: 0 = not known, 1 = male, 2 = female, 9 = not applicable
pub const ISO_5218_CODES: &[u8] = &[0, 1, 2, 9];

/// Sexual orientation glyphs
pub const SEXUALITY_SYMBOLS: &[&str] =
    &["\u{26a2}", "\u{26a3}", "\u{26a4}", "\u{26a5}", "\u{26aa}"];

/// Word pool for usernames and email local parts
pub const USERNAME_WORDS: &[&str] = &[
    "aardvark", "breeze", "cascade", "comet", "drift", "ember", "falcon", "glacier", "harbor",
    "indigo", "juniper", "kestrel", "lagoon", "meadow", "nimbus", "onyx", "pebble", "quartz",
    "raven", "saffron", "tundra", "umber", "vertex", "willow", "xenon", "yonder", "zephyr",
];

/// Default email domains, `@`-prefixed like user-supplied ones may be
pub const EMAIL_DOMAINS: &[&str] = &[
    "@example.com",
    "@example.org",
    "@gmail.com",
    "@outlook.com",
    "@yahoo.com",
    "@mail.com",
];

/// Characters drawn for plain passwords
pub const PASSWORD_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!?@#$%&*-_";

/// Characters drawn for the `@` mask token
pub const MASK_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default mask for [`Person::identifier`](crate::Person::identifier)
pub const DEFAULT_IDENTIFIER_MASK: &str = "##-##/##";

/// Default mask for [`Person::telephone`](crate::Person::telephone)
pub const DEFAULT_TELEPHONE_MASK: &str = "+7-(###)-###-##-##";

/// Host serving generated avatars
pub const AVATAR_HOST: &str = "https://avatars.example.org";
