use rand::Rng;
use rand::thread_rng;

use super::{capitalized_word, digit_string, pick};

pub const STREETS: [&str; 5] = ["Main", "Oak", "Pine", "Elm", "Cedar"];
pub const CITIES: [&str; 6] = ["Quito", "Guayaquil", "Cuenca", "Manta", "Ambato", "Loja"];

const FIRST_NAME_LEN: usize = 8;
const LAST_NAME_LEN: usize = 10;
const TELEPHONE_LEN: usize = 10;

/// Owner form data, submitted once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl OwnerRecord {
    /// Form fields in the order the owner form declares them.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("telephone", self.telephone.as_str()),
        ]
    }
}

#[must_use]
pub fn generate_owner_data() -> OwnerRecord {
    generate_owner_data_with(&mut thread_rng())
}

pub fn generate_owner_data_with<R: Rng + ?Sized>(rng: &mut R) -> OwnerRecord {
    let street_number: u16 = rng.gen_range(100..=9999);
    OwnerRecord {
        first_name: capitalized_word(rng, FIRST_NAME_LEN),
        last_name: capitalized_word(rng, LAST_NAME_LEN),
        address: format!("{} {} Street", street_number, pick(rng, &STREETS)),
        city: pick(rng, &CITIES).to_owned(),
        telephone: digit_string(rng, TELEPHONE_LEN),
    }
}
