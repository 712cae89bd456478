use std::collections::HashSet;

use lotto_types::{
    DrawEntry, DrawForm, FieldErrors, MAX_NUMBER, MIN_NUMBER, NOT_UNIQUE, NUMBERS_PER_ENTRY,
    OUT_OF_RANGE, PlayerEntry, PlayerForm, REQUIRED, WRONG_SLOT_COUNT,
};

pub const NAME_FIELD: &str = "name";
pub const GAME_ID_FIELD: &str = "gameId";
pub const DUPLICATE_FIELD: &str = "duplicate";
pub const NUMBERS_FIELD: &str = "numbers";

/// Check a player registration form. On success the trimmed name and parsed
/// numbers are returned; otherwise every failing field is reported at once.
pub fn validate_player(form: &PlayerForm) -> Result<PlayerEntry, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert(NAME_FIELD, REQUIRED);
    }

    let numbers = validate_numbers(&form.numbers, &mut errors);

    match numbers {
        Some(numbers) if errors.is_empty() => Ok(PlayerEntry {
            name: name.to_string(),
            avatar: form.avatar,
            numbers,
        }),
        _ => Err(errors),
    }
}

/// Check a draw form. Uniqueness of `gameId` against stored draws is not a
/// field rule; it is enforced when the draw is registered.
pub fn validate_draw(form: &DrawForm) -> Result<DrawEntry, FieldErrors> {
    let mut errors = FieldErrors::new();

    let game_id = form.game_id.trim();
    if game_id.is_empty() {
        errors.insert(GAME_ID_FIELD, REQUIRED);
    }

    let numbers = validate_numbers(&form.numbers, &mut errors);

    match numbers {
        Some(numbers) if errors.is_empty() => Ok(DrawEntry {
            game_id: game_id.to_string(),
            numbers,
        }),
        _ => Err(errors),
    }
}

/// Shared slot rules for players and draws. Returns the parsed numbers only
/// when every slot holds an in-range value.
fn validate_numbers(slots: &[String], errors: &mut FieldErrors) -> Option<Vec<u8>> {
    if slots.len() != NUMBERS_PER_ENTRY {
        errors.insert(NUMBERS_FIELD, WRONG_SLOT_COUNT);
    }

    let mut filled = Vec::with_capacity(NUMBERS_PER_ENTRY);
    let mut parsed = Vec::with_capacity(NUMBERS_PER_ENTRY);
    for index in 0..NUMBERS_PER_ENTRY {
        let slot = slots.get(index).map(|s| s.trim()).unwrap_or("");
        let field = FieldErrors::slot_field(index);

        if slot.is_empty() {
            errors.insert(field, REQUIRED);
            continue;
        }

        filled.push(number_key(slot));
        match parse_in_range(slot) {
            Some(value) => parsed.push(value),
            None => errors.insert(field, OUT_OF_RANGE),
        }
    }

    // Uniqueness is judged on every filled slot, whatever its own errors
    if filled.len() == NUMBERS_PER_ENTRY {
        let unique: HashSet<&str> = filled.iter().copied().collect();
        if unique.len() != NUMBERS_PER_ENTRY {
            errors.insert(DUPLICATE_FIELD, NOT_UNIQUE);
        }
    }

    (parsed.len() == NUMBERS_PER_ENTRY).then_some(parsed)
}

fn parse_in_range(slot: &str) -> Option<u8> {
    if !slot.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    slot.parse::<u8>()
        .ok()
        .filter(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n))
}

/// Comparable form of a slot: digit runs of any length compare by value
fn number_key(slot: &str) -> &str {
    if slot.bytes().all(|b| b.is_ascii_digit()) {
        match slot.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        }
    } else {
        slot
    }
}
