// src/presentation/http/controllers/mod.rs
pub mod admin_blog;
pub mod attorneys;
pub mod blog;
pub mod health;
pub mod legal;
pub mod migrations;
pub mod services;
pub mod session;
pub mod upload;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Tells an absent field (`None`) apart from an explicit `null`
/// (`Some(None)`) in partial updates. Pair with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        phone: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"phone":null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"phone":"+52 55"}"#).unwrap();
        assert_eq!(absent.phone, None);
        assert_eq!(null.phone, Some(None));
        assert_eq!(value.phone, Some(Some("+52 55".into())));
    }
}
