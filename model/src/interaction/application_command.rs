use super::ApplicationCommandOption;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A registered slash-command, as returned by the API.
///
/// `guild_id` is only used to address the command when editing or deleting
/// it later; a command without one is global.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommand {
    pub id: Snowflake,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

impl ApplicationCommand {
    /// Decodes a command payload, binding it to the given guild scope.
    /// A payload that already names a guild keeps it unless a scope is given.
    pub fn parse(
        payload: &str,
        guild_id: Option<Snowflake>,
    ) -> Result<ApplicationCommand, serde_json::Error> {
        let mut command: ApplicationCommand = serde_json::from_str(payload)?;

        if guild_id.is_some() {
            command.guild_id = guild_id;
        }

        Ok(command)
    }

    pub fn is_global(&self) -> bool {
        self.guild_id.is_none()
    }
}

// Commands are identified by their snowflake alone; name and description
// change across edits.
impl PartialEq for ApplicationCommand {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ApplicationCommand {}

impl Hash for ApplicationCommand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ApplicationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}
