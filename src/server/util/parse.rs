use crate::server::error::AppError;

/// Decoded `key=value` pairs of a raw query string, preserving repeated keys.
///
/// Axum's `Query` extractor keeps only one value per key, but recipe filters accept
/// `tags` several times (`?tags=lunch&tags=dinner`).
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Parses the query string; `None` yields an empty set.
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Self(pairs)
    }

    /// Last value given for `key`, ignoring empty values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value given for `key`, in request order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn get_u64(&self, key: &str) -> Result<Option<u64>, AppError> {
        self.get(key).map(|v| parse_number(key, v)).transpose()
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, AppError> {
        self.get(key).map(|v| parse_number(key, v)).transpose()
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, AppError> {
        self.get(key).map(|v| parse_flag(key, v)).transpose()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Query parameter '{}' must be a number", key)))
}

/// Accepts `1`/`0` as sent by the web client, as well as `true`/`false`.
pub fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(AppError::BadRequest(format!(
            "Query parameter '{}' must be 0 or 1",
            key
        ))),
    }
}
