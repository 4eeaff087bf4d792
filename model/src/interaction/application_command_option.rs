use super::{ApplicationCommandOptionChoice, ApplicationCommandOptionType};
use serde::{Deserialize, Serialize};

/// One node of a command's option tree: a leaf parameter, a subcommand, or a
/// subcommand group. Nested options hold a subcommand's parameters, or a
/// group's subcommands.
///
/// Parsed as-is from the API payload; the payload has already been validated
/// upstream, so no length or charset rules are re-applied here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCommandOption {
    pub name: Box<str>,
    pub description: Box<str>,
    pub r#type: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ApplicationCommandOptionChoice>,
}

impl ApplicationCommandOption {
    /// The typed kind for this option, or None for wire keys this version
    /// does not know.
    pub fn kind(&self) -> Option<ApplicationCommandOptionType> {
        ApplicationCommandOptionType::from_key(self.r#type)
    }
}
