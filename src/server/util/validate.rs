//! Field-level checks used when converting request DTOs into parameters.
//!
//! Every check pushes its messages into a shared `ValidationError` so callers can report
//! all broken fields in one response.

use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;

use crate::server::error::validation::{ValidationError, REQUIRED};

/// Lower and upper bound shared by ingredient amounts and cooking time.
pub const MIN_AMOUNT: i64 = 1;
pub const MAX_AMOUNT: i64 = 32_000;

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_USER_FIELD_LENGTH: usize = 150;
pub const MAX_RECIPE_NAME_LENGTH: usize = 256;
pub const MAX_TAG_FIELD_LENGTH: usize = 200;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Username reserved for the `/api/users/me/` route.
pub const RESERVED_USERNAME: &str = "me";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern is valid"));
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern is valid"));
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color pattern is valid"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));
static DATA_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,(?P<payload>[A-Za-z0-9+/=\s]+)$")
        .expect("image pattern is valid")
});

/// Returns the trimmed value, or records "required" when it is absent or blank.
pub fn required_text(
    errors: &mut ValidationError,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        errors.add(field, REQUIRED);
        return None;
    };

    if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Ensure this field has no more than {} characters.", max_len),
        );
        return None;
    }

    Some(value)
}

/// Same as [`required_text`] but an absent value is accepted and returns `None`.
pub fn optional_text(
    errors: &mut ValidationError,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    value.and_then(|v| required_text(errors, field, Some(v), max_len))
}

pub fn email(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    if EMAIL_RE.is_match(value) {
        return true;
    }
    errors.add(field, "Enter a valid email address.");
    false
}

pub fn username(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    if value.eq_ignore_ascii_case(RESERVED_USERNAME) {
        errors.add(field, format!("Username '{}' is not allowed.", value));
        return false;
    }
    if !USERNAME_RE.is_match(value) {
        errors.add(
            field,
            "Enter a valid username. It may contain only letters, numbers, and @/./+/-/_ characters.",
        );
        return false;
    }
    true
}

pub fn slug(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    if SLUG_RE.is_match(value) {
        return true;
    }
    errors.add(
        field,
        "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
    );
    false
}

pub fn color(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    if COLOR_RE.is_match(value) {
        return true;
    }
    errors.add(field, "Enter a valid hex color, e.g. #E26C2D.");
    false
}

/// Accepts a `data:image/...;base64,` URI whose payload decodes to at least one byte.
pub fn image(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    let decoded = DATA_URI_RE
        .captures(value)
        .and_then(|caps| caps.name("payload"))
        .map(|payload| {
            let compact: String = payload
                .as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            STANDARD.decode(compact)
        });

    if matches!(decoded, Some(Ok(bytes)) if !bytes.is_empty()) {
        return true;
    }
    errors.add(field, "Upload a valid image as a base64 data URI.");
    false
}

pub fn password(errors: &mut ValidationError, field: &str, value: &str) -> bool {
    let mut valid = true;
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            field,
            format!(
                "This password is too short. It must contain at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        );
        valid = false;
    }
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        errors.add(field, "This password is entirely numeric.");
        valid = false;
    }
    valid
}

/// Checks `value` lies in `MIN_AMOUNT..=MAX_AMOUNT` and narrows it to the column type.
pub fn amount(errors: &mut ValidationError, field: &str, value: i64) -> Option<i32> {
    if value < MIN_AMOUNT {
        errors.add(
            field,
            format!("Ensure this value is greater than or equal to {}.", MIN_AMOUNT),
        );
        return None;
    }
    if value > MAX_AMOUNT {
        errors.add(
            field,
            format!("Ensure this value is less than or equal to {}.", MAX_AMOUNT),
        );
        return None;
    }
    i32::try_from(value).ok()
}
