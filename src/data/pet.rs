use chrono::NaiveDate;
use rand::Rng;
use rand::thread_rng;

use super::pick;

pub const PET_NAMES: [&str; 8] = [
    "Max", "Bella", "Luna", "Charlie", "Lucy", "Cooper", "Daisy", "Rocky",
];
pub const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

/// Pet form data. `birth_date` is always `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetRecord {
    pub name: String,
    pub birth_date: String,
    pub pet_type: String,
}

impl PetRecord {
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("birthDate", self.birth_date.as_str()),
            ("type", self.pet_type.as_str()),
        ]
    }
}

#[must_use]
pub fn generate_pet_data() -> PetRecord {
    generate_pet_data_with(&mut thread_rng())
}

pub fn generate_pet_data_with<R: Rng + ?Sized>(rng: &mut R) -> PetRecord {
    let base_name = pick(rng, &PET_NAMES);
    let suffix: u16 = rng.gen_range(1..=9999);
    let pet_type = pick(rng, &PET_TYPES);

    // Day is capped at 28 so every month is valid.
    let year: i32 = rng.gen_range(2015..=2025);
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).map_or_else(
        || format!("{:04}-{:02}-{:02}", year, month, day),
        |date| date.format("%Y-%m-%d").to_string(),
    );

    PetRecord {
        name: format!("{}_{}", base_name, suffix),
        birth_date,
        pet_type: pet_type.to_owned(),
    }
}
