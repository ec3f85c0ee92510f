//! Random owner and pet field sets for the create-owner/create-pet flow.
mod owner;
mod pet;


pub use owner::{CITIES, OwnerRecord, STREETS, generate_owner_data, generate_owner_data_with};
pub use pet::{PET_NAMES, PET_TYPES, PetRecord, generate_pet_data, generate_pet_data_with};

use rand::Rng;
use rand::seq::SliceRandom;

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ASCII_DIGITS: &[u8] = b"0123456789";

/// Random letters, first one uppercased and the rest lowercased.
fn capitalized_word<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut word = String::with_capacity(len);
    for _ in 0..len {
        let Some(&letter) = ASCII_LETTERS.choose(rng) else {
            break;
        };
        let ch = char::from(letter);
        if word.is_empty() {
            word.push(ch.to_ascii_uppercase());
        } else {
            word.push(ch.to_ascii_lowercase());
        }
    }
    word
}

fn digit_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .filter_map(|_| ASCII_DIGITS.choose(rng).copied())
        .map(char::from)
        .collect()
}

fn pick<'list, R: Rng + ?Sized>(rng: &mut R, items: &[&'list str]) -> &'list str {
    items.choose(rng).copied().unwrap_or_default()
}
