use crate::util;
use serde::de::Error;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A predefined value for a string or integer option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationCommandOptionChoice {
    name: Box<str>,
    int_value: i64,
    string_value: Box<str>,
    kind: ValueKind,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum ValueKind {
    Integer,
    String,
}

impl ApplicationCommandOptionChoice {
    pub fn new_int(name: impl Into<Box<str>>, value: i64) -> ApplicationCommandOptionChoice {
        ApplicationCommandOptionChoice {
            name: name.into(),
            int_value: value,
            // Integer choices also carry their decimal rendering, so as_str
            // answers for every choice regardless of the value's origin.
            string_value: value.to_string().into_boxed_str(),
            kind: ValueKind::Integer,
        }
    }

    pub fn new_string(
        name: impl Into<Box<str>>,
        value: impl Into<Box<str>>,
    ) -> ApplicationCommandOptionChoice {
        ApplicationCommandOptionChoice {
            name: name.into(),
            int_value: 0,
            string_value: value.into(),
            kind: ValueKind::String,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integer value; 0 for string-valued choices.
    pub fn as_i64(&self) -> i64 {
        self.int_value
    }

    /// The string value; integer-valued choices render in decimal.
    pub fn as_str(&self) -> &str {
        &self.string_value
    }
}

impl Serialize for ApplicationCommandOptionChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ApplicationCommandOptionChoice", 2)?;
        s.serialize_field("name", &self.name)?;

        match self.kind {
            ValueKind::Integer => s.serialize_field("value", &self.int_value)?,
            ValueKind::String => s.serialize_field("value", &self.string_value)?,
        }

        s.end()
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandOptionChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: Box<str>,
            value: Value,
        }

        let raw = Raw::deserialize(deserializer)?;

        match raw.value {
            Value::Number(n) => {
                let value = n
                    .as_i64()
                    .ok_or_else(|| Error::custom(format!("choice value {} is not an i64", n)))?;
                Ok(ApplicationCommandOptionChoice::new_int(raw.name, value))
            }
            Value::String(s) => Ok(ApplicationCommandOptionChoice::new_string(raw.name, s)),
            other => Err(Error::invalid_type(
                util::to_unexpected(other),
                &"an integer or string choice value",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_int_value() {
        let choice: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"N","value":5}"#).unwrap();

        assert_eq!(choice.name(), "N");
        assert_eq!(choice.as_i64(), 5);
        assert_eq!(choice.as_str(), "5");
    }

    #[test]
    fn test_deserialize_string_value() {
        let choice: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"N","value":"five"}"#).unwrap();

        assert_eq!(choice.name(), "N");
        assert_eq!(choice.as_i64(), 0);
        assert_eq!(choice.as_str(), "five");
    }

    #[test]
    fn test_deserialize_negative_value() {
        let choice: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"N","value":-3}"#).unwrap();

        assert_eq!(choice.as_i64(), -3);
        assert_eq!(choice.as_str(), "-3");
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        assert!(serde_json::from_str::<ApplicationCommandOptionChoice>(
            r#"{"name":"N","value":true}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ApplicationCommandOptionChoice>(
            r#"{"name":"N","value":2.5}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ApplicationCommandOptionChoice>(r#"{"name":"N"}"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_value_shape() {
        let int_choice = ApplicationCommandOptionChoice::new_int("Count", 5);
        let json = serde_json::to_string(&int_choice).unwrap();
        assert_eq!(json, r#"{"name":"Count","value":5}"#);

        let string_choice = ApplicationCommandOptionChoice::new_string("Red", "red");
        let json = serde_json::to_string(&string_choice).unwrap();
        assert_eq!(json, r#"{"name":"Red","value":"red"}"#);
    }

    #[test]
    fn test_constructors_match_parsed_form() {
        let parsed: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"N","value":5}"#).unwrap();
        assert_eq!(parsed, ApplicationCommandOptionChoice::new_int("N", 5));

        let parsed: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"N","value":"five"}"#).unwrap();
        assert_eq!(parsed, ApplicationCommandOptionChoice::new_string("N", "five"));
    }
}
