use model::interaction::ApplicationCommandOptionType;

pub type Result<T, E = ArgumentError> = std::result::Result<T, E>;

/// Returned when a builder call violates the schema rules. The builder is
/// left exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{0} may not be empty")]
    Empty(&'static str),

    #[error("{0} may not be longer than {1} characters")]
    TooLong(&'static str, usize),

    #[error("{0} may only contain alphanumeric characters and dashes")]
    InvalidFormat(&'static str),

    #[error("{0} must be lowercase")]
    NotLowercase(&'static str),

    #[error("Choices are not supported for options of type {0:?}")]
    ChoicesNotSupported(ApplicationCommandOptionType),

    #[error("Cannot add {given} choice for option of type {kind:?}")]
    ChoiceTypeMismatch {
        given: &'static str,
        kind: ApplicationCommandOptionType,
    },

    #[error("Cannot have more than 25 choices for an option")]
    TooManyChoices,
}

/// Returned when an external payload does not match the expected shape.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Error occurred while parsing json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parsed payload failed validation: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Choice value must be an integer or a string")]
    InvalidChoiceValue,
}
