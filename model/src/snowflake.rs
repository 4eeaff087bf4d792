use super::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(Snowflake(i));
        }

        if let Some(s) = value.as_str() {
            return Ok(Snowflake(s.parse().map_err(Error::custom)?));
        }

        Err(Error::invalid_type(
            util::to_unexpected(value),
            &"a string or u64",
        ))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string() {
        let snowflake: Snowflake = serde_json::from_str(r#""844974450927083535""#).unwrap();
        assert_eq!(snowflake, Snowflake(844974450927083535));
    }

    #[test]
    fn test_deserialize_int() {
        let snowflake: Snowflake = serde_json::from_str("844974450927083535").unwrap();
        assert_eq!(snowflake, Snowflake(844974450927083535));
    }

    #[test]
    fn test_deserialize_invalid() {
        assert!(serde_json::from_str::<Snowflake>(r#""not a number""#).is_err());
        assert!(serde_json::from_str::<Snowflake>("true").is_err());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Snowflake(844974450927083535)).unwrap();
        assert_eq!(json, r#""844974450927083535""#);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("844974450927083535".parse(), Ok(Snowflake(844974450927083535)));
        assert!("snowflake".parse::<Snowflake>().is_err());
    }
}
