use crate::checks;
use crate::error::{ArgumentError, ParseError, Result};
use indexmap::IndexMap;
use model::interaction::{ApplicationCommandOptionChoice, ApplicationCommandOptionType};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Builder for a single slash-command option.
///
/// Options are not required by default.
#[derive(Debug, Clone)]
pub struct CommandOptionBuilder {
    kind: ApplicationCommandOptionType,
    name: String,
    description: String,
    required: bool,
    // Some iff the kind supports choices, decided once at construction.
    // Insertion order is the order sent over the wire; re-adding a name
    // overwrites its value in place.
    choices: Option<IndexMap<String, ChoiceValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum ChoiceValue {
    Int(i64),
    String(String),
}

impl CommandOptionBuilder {
    /// Creates an option builder.
    ///
    /// The name must be 1-32 lowercase alphanumeric or dash characters, the
    /// description 1-100 characters.
    pub fn new(
        kind: ApplicationCommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CommandOptionBuilder> {
        let name = name.into();
        let description = description.into();

        checks::not_empty(&name, "Name")?;
        checks::not_empty(&description, "Description")?;
        checks::not_longer(&name, 32, "Name")?;
        checks::not_longer(&description, 100, "Description")?;
        checks::alphanumeric_with_dash(&name, "Name")?;
        checks::is_lowercase(&name, "Name")?;

        let choices = if kind.supports_choices() {
            Some(IndexMap::new())
        } else {
            None
        };

        Ok(CommandOptionBuilder {
            kind,
            name,
            description,
            required: false,
            choices,
        })
    }

    pub fn kind(&self) -> ApplicationCommandOptionType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Required options must always be filled out when using the command.
    pub fn set_required(&mut self, required: bool) -> &mut CommandOptionBuilder {
        self.required = required;
        self
    }

    /// An ordered snapshot of the configured choices; empty unless the kind
    /// supports choices and at least one has been added.
    pub fn choices(&self) -> Vec<ApplicationCommandOptionChoice> {
        match &self.choices {
            Some(choices) => choices
                .iter()
                .map(|(name, value)| match value {
                    ChoiceValue::Int(value) => {
                        ApplicationCommandOptionChoice::new_int(name.as_str(), *value)
                    }
                    ChoiceValue::String(value) => {
                        ApplicationCommandOptionChoice::new_string(name.as_str(), value.as_str())
                    }
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Adds a predefined integer choice. Only valid for Integer options; at
    /// most 25 choices may be present. Re-adding a name overwrites its value
    /// and keeps its position.
    pub fn add_int_choice(
        &mut self,
        name: impl Into<String>,
        value: i64,
    ) -> Result<&mut CommandOptionBuilder> {
        let name = name.into();

        checks::not_empty(&name, "Name")?;
        checks::not_longer(&name, 100, "Name")?;

        let choices = match self.choices.as_mut() {
            Some(choices) => choices,
            None => return Err(ArgumentError::ChoicesNotSupported(self.kind)),
        };

        checks::check(choices.len() < 25, ArgumentError::TooManyChoices)?;

        if self.kind != ApplicationCommandOptionType::Integer {
            return Err(ArgumentError::ChoiceTypeMismatch {
                given: "int",
                kind: self.kind,
            });
        }

        choices.insert(name, ChoiceValue::Int(value));
        Ok(self)
    }

    /// Adds a predefined string choice. Only valid for String options; the
    /// value is bounded to 100 characters like the name.
    pub fn add_string_choice(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut CommandOptionBuilder> {
        let name = name.into();
        let value = value.into();

        checks::not_empty(&name, "Name")?;
        checks::not_empty(&value, "Value")?;
        checks::not_longer(&name, 100, "Name")?;
        checks::not_longer(&value, 100, "Value")?;

        let choices = match self.choices.as_mut() {
            Some(choices) => choices,
            None => return Err(ArgumentError::ChoicesNotSupported(self.kind)),
        };

        checks::check(choices.len() < 25, ArgumentError::TooManyChoices)?;

        if self.kind != ApplicationCommandOptionType::String {
            return Err(ArgumentError::ChoiceTypeMismatch {
                given: "string",
                kind: self.kind,
            });
        }

        choices.insert(name, ChoiceValue::String(value));
        Ok(self)
    }

    /// Parses a serialized option back into a builder, the reverse of the
    /// Serialize impl. The payload goes through the same validation as
    /// direct construction, so a malformed option fails here the same way a
    /// hand-built one would.
    pub fn load(json: &Value) -> Result<CommandOptionBuilder, ParseError> {
        #[derive(Deserialize)]
        struct RawOption {
            r#type: ApplicationCommandOptionType,
            name: String,
            description: String,
            required: Option<bool>,
            choices: Option<Vec<RawChoice>>,
        }

        #[derive(Deserialize)]
        struct RawChoice {
            name: String,
            value: Value,
        }

        let raw = RawOption::deserialize(json)?;

        let mut builder = CommandOptionBuilder::new(raw.r#type, raw.name, raw.description)?;
        builder.set_required(raw.required.unwrap_or(false));

        for choice in raw.choices.unwrap_or_default() {
            // The value's own json shape decides the choice kind; there is
            // no discriminator field on the wire.
            match choice.value {
                Value::Number(n) => {
                    let value = n.as_i64().ok_or(ParseError::InvalidChoiceValue)?;
                    builder.add_int_choice(choice.name, value)?;
                }
                Value::String(value) => {
                    builder.add_string_choice(choice.name, value)?;
                }
                _ => return Err(ParseError::InvalidChoiceValue),
            }
        }

        Ok(builder)
    }
}

impl Serialize for CommandOptionBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let grouping = matches!(
            self.kind,
            ApplicationCommandOptionType::SubCommand | ApplicationCommandOptionType::SubCommandGroup
        );

        let choices = self.choices.as_ref().filter(|choices| !choices.is_empty());

        let mut len = 3;
        if !grouping {
            len += 1;
        }
        if choices.is_some() {
            len += 1;
        }

        let mut s = serializer.serialize_struct("CommandOptionBuilder", len)?;
        s.serialize_field("type", &self.kind)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("description", &self.description)?;

        // Grouping nodes never carry a required flag on the wire.
        if !grouping {
            s.serialize_field("required", &self.required)?;
        }

        if choices.is_some() {
            s.serialize_field("choices", &self.choices())?;
        }

        s.end()
    }
}
