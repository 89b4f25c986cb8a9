pub mod age;
pub mod email;
pub mod gender;
pub mod name;
pub mod patronymic;
pub mod phone_number;
pub mod surname;

pub use age::Age;
pub use email::Email;
pub use gender::Gender;
pub use name::Name;
pub use patronymic::Patronymic;
pub use phone_number::PhoneNumber;
pub use surname::Surname;

use regex::Regex;
use std::sync::OnceLock;

static PERSON_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Unicode letters, with single space/hyphen/apostrophe separators.
pub(crate) fn person_name_re() -> &'static Regex {
    PERSON_NAME_RE.get_or_init(|| {
        Regex::new(r"^\p{L}+(?:[ '\-]\p{L}+)*$").expect("person name pattern is valid")
    })
}
