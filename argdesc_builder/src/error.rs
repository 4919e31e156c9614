use thiserror::Error;

/// A misconfiguration of the descriptor tree, discovered while building it or while laying out its help.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An incrementing counter (`"+"` string default) that also takes a value.
    #[error("Config error: cmd({cmd_name}) can not set value({value})")]
    IncrementWithoutFlag {
        /// The command owning the offending option.
        cmd_name: String,
        /// The offending default value.
        value: String,
    },
    /// Two options on one command share a long name.
    #[error("Config error: Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),
    /// Two sub-commands on one command share a name.
    #[error("Config error: Cannot duplicate the sub-command '{0}'.")]
    DuplicateSubcommand(String),
    /// A command node was requested from a descriptor that is not a command.
    #[error("Config error: '{0}' is not a command descriptor.")]
    NotACommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_message() {
        let error = ConfigError::IncrementWithoutFlag {
            cmd_name: "build".to_string(),
            value: "+".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Config error: cmd(build) can not set value(+)"
        );
    }
}
