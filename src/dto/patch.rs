use serde::{Deserialize, Deserializer};

/// Field-presence wrapper for sparse-patch payloads.
///
/// Plain `Option<T>` cannot tell an absent field from an explicit `null`,
/// so patch payloads wrap every field in `Patch<T>`: `Missing` leaves the
/// stored value unchanged, `Null` is an explicit `null` (rejected for
/// non-nullable columns), `Value` sets the field.
///
/// Requires `#[serde(default)]` on the field so that absence deserializes
/// to `Missing`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        name: Patch<String>,
        #[serde(default)]
        order: Patch<i32>,
    }

    #[test]
    fn absent_field_is_missing() {
        let p: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert!(p.name.is_missing());
        assert!(p.order.is_missing());
    }

    #[test]
    fn explicit_null_is_null() {
        let p: Payload = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(p.name.is_null());
        assert!(p.order.is_missing());
    }

    #[test]
    fn value_is_kept() {
        let p: Payload = serde_json::from_str(r#"{"name": "x", "order": 7}"#).unwrap();
        assert_eq!(p.name.value(), Some(&"x".to_string()));
        assert_eq!(p.order.value(), Some(&7));
    }
}
