mod application_command;
pub use application_command::ApplicationCommand;

mod application_command_option;
pub use application_command_option::ApplicationCommandOption;

mod application_command_option_type;
pub use application_command_option_type::ApplicationCommandOptionType;

mod application_command_option_choice;
pub use application_command_option_choice::ApplicationCommandOptionChoice;
