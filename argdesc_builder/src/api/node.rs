use terminal_size::{terminal_size, Width};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::OptionDescriptor;
use crate::constant::*;
use crate::error::ConfigError;
use crate::layout::{help_printer, measure_node, LayoutMetrics};
use crate::model::Depth;

/// The configuration bag for a command tree.
///
/// ### Example
/// ```
/// # use argdesc_builder as argdesc;
/// use argdesc::{CommandNode, HelpOptions};
///
/// let options = HelpOptions::default()
///     .screen_width(100)
///     .prog("tool");
/// let root = CommandNode::root(&options);
///
/// assert_eq!(root.screen_width(), 100);
/// assert_eq!(root.prog(), "tool");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpOptions {
    screen_width: Option<i64>,
    prog: Option<String>,
}

impl HelpOptions {
    /// Options sized to the current terminal, when there is one.
    /// Without a terminal (ex: output is piped), the width is left unset and resolves to the minimum.
    ///
    /// ### Example
    /// ```
    /// # use argdesc_builder as argdesc;
    /// use argdesc::{CommandNode, HelpOptions};
    ///
    /// let root = CommandNode::root(&HelpOptions::terminal());
    /// assert!(root.screen_width() >= 40);
    /// ```
    pub fn terminal() -> Self {
        let screen_width = if let Some((Width(width), _)) = terminal_size() {
            Some(i64::from(width))
        } else {
            None
        };

        Self {
            screen_width,
            prog: None,
        }
    }

    /// Set the render width.
    /// Values below the minimum of 40 columns are raised to it.
    pub fn screen_width(mut self, screen_width: i64) -> Self {
        self.screen_width.replace(screen_width);
        self
    }

    /// Set the program name shown in usage lines.
    pub fn prog(mut self, prog: impl Into<String>) -> Self {
        self.prog.replace(prog.into());
        self
    }

    pub(crate) fn resolved_screen_width(&self) -> usize {
        match self.screen_width {
            Some(width) if width > MINIMUM_SCREEN_WIDTH as i64 => width as usize,
            _ => MINIMUM_SCREEN_WIDTH,
        }
    }
}

/// One level of the command tree: a command, its options, and its sub-commands.
///
/// The command name and help message are derived from the descriptor at construction and are read-only.
///
/// ```compile_fail
/// # use argdesc_builder as argdesc;
/// use argdesc::{CommandNode, HelpOptions};
///
/// let mut root = CommandNode::root(&HelpOptions::default());
/// root.cmd_name = "other".to_string();
/// ```
///
/// ### Example
/// ```
/// # use argdesc_builder as argdesc;
/// use argdesc::{CommandNode, HelpOptions, OptionDescriptor, OptionKind};
///
/// let options = HelpOptions::default().prog("tool");
/// let mut root = CommandNode::root(&options);
/// root.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose").value(false))
///     .unwrap();
/// root.add_subcommand(
///     CommandNode::new(OptionDescriptor::command("build").help("build the project"), &options)
///         .unwrap(),
/// )
/// .unwrap();
///
/// let help = root.render_help(None, &[]).unwrap();
/// assert!(help.contains("verbose set true default(False)"));
/// assert!(help.contains("[build] build the project"));
/// ```
#[derive(Debug, Clone)]
pub struct CommandNode {
    descriptor: OptionDescriptor,
    cmd_name: String,
    help_info: String,
    call_function: String,
    options: Vec<OptionDescriptor>,
    subcommands: Vec<CommandNode>,
    screen_width: usize,
    prog: String,
    epilog: String,
    description: String,
    usage: String,
    version: String,
}

impl CommandNode {
    fn base(
        descriptor: OptionDescriptor,
        cmd_name: String,
        help_info: String,
        call_function: String,
        options: &HelpOptions,
    ) -> Self {
        Self {
            descriptor,
            cmd_name,
            help_info,
            call_function,
            options: Vec::default(),
            subcommands: Vec::default(),
            screen_width: options.resolved_screen_width(),
            prog: options.prog.clone().unwrap_or_default(),
            epilog: String::default(),
            description: String::default(),
            usage: String::default(),
            version: String::default(),
        }
    }

    /// Create the root of a command tree.
    /// The root has an empty command name and help message.
    pub fn root(options: &HelpOptions) -> Self {
        Self::base(
            OptionDescriptor::command(ROOT_NAME),
            String::default(),
            String::default(),
            String::default(),
            options,
        )
    }

    /// Create a sub-command node from a command descriptor.
    ///
    /// Without an explicit help message, the help message reads `"<cmd_name> handler"`.
    pub fn new(descriptor: OptionDescriptor, options: &HelpOptions) -> Result<Self, ConfigError> {
        if !descriptor.is_cmd() {
            return Err(ConfigError::NotACommand(descriptor.long_opt().to_string()));
        }

        let cmd_name = descriptor.cmd_name().to_string();
        let help_info = if descriptor.help_info().is_empty() {
            format!("{cmd_name} handler")
        } else {
            descriptor.help_info().to_string()
        };
        let call_function = descriptor.function_name().to_string();

        Ok(Self::base(
            descriptor,
            cmd_name,
            help_info,
            call_function,
            options,
        ))
    }

    /// Add an option to this command.
    /// Options are displayed in the order they are added.
    pub fn add_option(&mut self, descriptor: OptionDescriptor) -> Result<(), ConfigError> {
        if self
            .options
            .iter()
            .any(|existing| existing.long_opt() == descriptor.long_opt())
        {
            return Err(ConfigError::DuplicateOption(
                descriptor.long_opt().to_string(),
            ));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Adding option '{}' to command '{}'.",
                descriptor.long_opt(),
                self.cmd_name
            );
        }

        self.options.push(descriptor);
        Ok(())
    }

    /// Add a sub-command to this command.
    /// Sub-commands are displayed in the order they are added.
    pub fn add_subcommand(&mut self, subcommand: CommandNode) -> Result<(), ConfigError> {
        if self
            .subcommands
            .iter()
            .any(|existing| existing.cmd_name == subcommand.cmd_name)
        {
            return Err(ConfigError::DuplicateSubcommand(subcommand.cmd_name));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Adding sub-command '{}' to command '{}'.",
                subcommand.cmd_name, self.cmd_name
            );
        }

        self.subcommands.push(subcommand);
        Ok(())
    }

    /// Override the program name shown in usage lines.
    pub fn with_prog(mut self, prog: impl Into<String>) -> Self {
        self.prog = prog.into();
        self
    }

    /// Document the text displayed after the help tables.
    pub fn with_epilog(mut self, epilog: impl Into<String>) -> Self {
        self.epilog = epilog.into();
        self
    }

    /// Document the text displayed before the help tables.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the generated usage line.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Document the version displayed under the usage line.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The descriptor this node was built from.
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    /// The command name (empty for the root).
    pub fn cmd_name(&self) -> &str {
        &self.cmd_name
    }

    /// The command help message.
    pub fn help_info(&self) -> &str {
        &self.help_info
    }

    /// The handler name (empty when unset).
    pub fn call_function(&self) -> &str {
        &self.call_function
    }

    /// The options, in display order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// The sub-commands, in display order.
    pub fn subcommands(&self) -> &[CommandNode] {
        &self.subcommands
    }

    /// The render width, at least 40.
    pub fn screen_width(&self) -> usize {
        self.screen_width
    }

    /// The program name (empty when unset).
    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// The text displayed after the help tables.
    pub fn epilog(&self) -> &str {
        &self.epilog
    }

    /// The text displayed before the help tables.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The usage line override (empty when the usage line is generated).
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The version text.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Find a descendant by following sub-command names.
    /// An empty path finds `self`.
    ///
    /// ### Example
    /// ```
    /// # use argdesc_builder as argdesc;
    /// use argdesc::{CommandNode, HelpOptions, OptionDescriptor};
    ///
    /// let options = HelpOptions::default();
    /// let mut remote = CommandNode::new(OptionDescriptor::command("remote"), &options).unwrap();
    /// remote
    ///     .add_subcommand(CommandNode::new(OptionDescriptor::command("add"), &options).unwrap())
    ///     .unwrap();
    /// let mut root = CommandNode::root(&options);
    /// root.add_subcommand(remote).unwrap();
    ///
    /// assert_eq!(root.find_subcommand(&["remote", "add"]).unwrap().help_info(), "add handler");
    /// assert!(root.find_subcommand(&["add"]).is_none());
    /// ```
    pub fn find_subcommand(&self, path: &[&str]) -> Option<&CommandNode> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .subcommands
                .iter()
                .find(|sub| sub.cmd_name == *head)
                .and_then(|sub| sub.find_subcommand(rest)),
        }
    }

    /// Measure the help columns of this command into `metrics`.
    ///
    /// `depth` controls how far the contents of sub-commands are measured.
    /// The headline (name and help) of each direct sub-command is always measured.
    pub fn measure_into(
        &self,
        metrics: &mut LayoutMetrics,
        depth: Depth,
    ) -> Result<(), ConfigError> {
        measure_node(self, metrics, depth)
    }

    /// Measure the help columns of this command.
    ///
    /// ### Example
    /// ```
    /// # use argdesc_builder as argdesc;
    /// use argdesc::{CommandNode, Depth, HelpOptions, OptionDescriptor, OptionKind};
    ///
    /// let mut root = CommandNode::root(&HelpOptions::default());
    /// root.add_option(OptionDescriptor::option(OptionKind::Int, "--jobs").short("-j"))
    ///     .unwrap();
    ///
    /// let metrics = root.measure(Depth::Unlimited).unwrap();
    /// // "--jobs|-j" plus a separating space.
    /// assert_eq!(metrics.opt_name_width(), 10);
    /// ```
    pub fn measure(&self, depth: Depth) -> Result<LayoutMetrics, ConfigError> {
        let mut metrics = LayoutMetrics::default();
        self.measure_into(&mut metrics, depth)?;
        Ok(metrics)
    }

    /// Render the help text of this command.
    ///
    /// Columns are aligned to `metrics`, or to this command's own `Depth::Levels(0)` measurement when `None`.
    /// `parents` lists the enclosing commands, outermost first, for the usage line.
    pub fn render_help(
        &self,
        metrics: Option<&LayoutMetrics>,
        parents: &[&CommandNode],
    ) -> Result<String, ConfigError> {
        help_printer(self, metrics.copied(), parents).render()
    }
}
