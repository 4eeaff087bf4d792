use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(
    Serialize_repr, Deserialize_repr, Copy, Clone, Debug, Eq, FromPrimitive, PartialEq, Hash,
)]
#[repr(u8)]
pub enum ApplicationCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
}

impl ApplicationCommandOptionType {
    pub fn from_key(key: u8) -> Option<ApplicationCommandOptionType> {
        FromPrimitive::from_u8(key)
    }

    pub fn key(self) -> u8 {
        self as u8
    }

    /// Whether options of this type may carry predefined choices.
    pub fn supports_choices(self) -> bool {
        matches!(
            self,
            ApplicationCommandOptionType::String
                | ApplicationCommandOptionType::Integer
                | ApplicationCommandOptionType::Number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(
            ApplicationCommandOptionType::from_key(1),
            Some(ApplicationCommandOptionType::SubCommand)
        );
        assert_eq!(
            ApplicationCommandOptionType::from_key(10),
            Some(ApplicationCommandOptionType::Number)
        );
        assert_eq!(ApplicationCommandOptionType::from_key(0), None);
        assert_eq!(ApplicationCommandOptionType::from_key(11), None);
    }

    #[test]
    fn test_supports_choices() {
        assert!(ApplicationCommandOptionType::String.supports_choices());
        assert!(ApplicationCommandOptionType::Integer.supports_choices());
        assert!(ApplicationCommandOptionType::Number.supports_choices());
        assert!(!ApplicationCommandOptionType::SubCommand.supports_choices());
        assert!(!ApplicationCommandOptionType::Boolean.supports_choices());
        assert!(!ApplicationCommandOptionType::Role.supports_choices());
    }

    #[test]
    fn test_serialize_as_key() {
        let json = serde_json::to_string(&ApplicationCommandOptionType::String).unwrap();
        assert_eq!(json, "3");
        assert_eq!(ApplicationCommandOptionType::String.key(), 3);
        assert_eq!(ApplicationCommandOptionType::Number.key(), 10);
    }
}
