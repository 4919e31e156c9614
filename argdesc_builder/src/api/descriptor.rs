use std::sync::Arc;

use crate::model::{OptionKind, OptionValue};

/// A caller supplied formatter for a single descriptor's help text.
///
/// When registered via [`OptionDescriptor::help_hook`], its output replaces the help derived from the descriptor's kind.
pub type HelpHook = Arc<dyn Fn(&OptionDescriptor) -> String + Send + Sync>;

/// The description of one flag or one sub-command.
///
/// Descriptors are assembled with consuming setters and are read-only afterwards.
///
/// ### Example
/// ```
/// # use argdesc_builder as argdesc;
/// use argdesc::{OptionDescriptor, OptionKind};
///
/// let verbose = OptionDescriptor::option(OptionKind::Bool, "--verbose")
///     .short("-v")
///     .value(false);
///
/// assert_eq!(verbose.long_opt(), "--verbose");
/// assert_eq!(verbose.var_name(), "verbose");
/// assert_eq!(verbose.short_opt(), Some("-v"));
/// ```
#[derive(Clone)]
pub struct OptionDescriptor {
    long_opt: String,
    short_opt: Option<String>,
    kind: OptionKind,
    var_name: Option<String>,
    value: OptionValue,
    is_flag: bool,
    help_info: String,
    cmd_name: String,
    opt_dest: Option<String>,
    function: String,
    is_cmd: bool,
    help_hook: Option<HelpHook>,
}

impl std::fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("long_opt", &self.long_opt)
            .field("short_opt", &self.short_opt)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("is_flag", &self.is_flag)
            .field("cmd_name", &self.cmd_name)
            .field("is_cmd", &self.is_cmd)
            .field("help_hook", &self.help_hook.is_some())
            .finish()
    }
}

impl OptionDescriptor {
    fn base(kind: OptionKind, long_opt: String) -> Self {
        Self {
            long_opt,
            short_opt: None,
            kind,
            var_name: None,
            value: OptionValue::Null,
            is_flag: false,
            help_info: String::default(),
            cmd_name: String::default(),
            opt_dest: None,
            function: String::default(),
            is_cmd: false,
            help_hook: None,
        }
    }

    /// Describe a flag/option of the given kind.
    ///
    /// Bool and help options are flags from the outset; for other kinds use [`OptionDescriptor::flag`].
    pub fn option(kind: OptionKind, long_opt: impl Into<String>) -> Self {
        let is_flag = matches!(kind, OptionKind::Bool | OptionKind::Help);
        let mut descriptor = Self::base(kind, long_opt.into());
        descriptor.is_flag = is_flag;
        descriptor
    }

    /// Describe a sub-command.
    ///
    /// ### Example
    /// ```
    /// # use argdesc_builder as argdesc;
    /// use argdesc::OptionDescriptor;
    ///
    /// let build = OptionDescriptor::command("build")
    ///     .help("build the project")
    ///     .function("do_build");
    ///
    /// assert!(build.is_cmd());
    /// assert_eq!(build.cmd_name(), "build");
    /// assert_eq!(build.function_name(), "do_build");
    /// ```
    pub fn command(cmd_name: impl Into<String>) -> Self {
        let cmd_name = cmd_name.into();
        let mut descriptor = Self::base(OptionKind::Command, cmd_name.clone());
        descriptor.cmd_name = cmd_name;
        descriptor.is_cmd = true;
        descriptor
    }

    /// Set the short alias (ex: `-v`).
    pub fn short(mut self, short_opt: impl Into<String>) -> Self {
        let short_opt = short_opt.into();
        self.short_opt = if short_opt.is_empty() {
            None
        } else {
            Some(short_opt)
        };
        self
    }

    /// Set the destination variable name.
    /// Defaults to the long option without leading dashes.
    pub fn variable(mut self, var_name: impl Into<String>) -> Self {
        self.var_name.replace(var_name.into());
        self
    }

    /// Set the default value.
    pub fn value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Declare whether the option consumes no following value.
    pub fn flag(mut self, is_flag: bool) -> Self {
        self.is_flag = is_flag;
        self
    }

    /// Document the help message; when non-empty it takes precedence over every derived message.
    pub fn help(mut self, help_info: impl Into<String>) -> Self {
        self.help_info = help_info.into();
        self
    }

    /// Set the name of the owning command.
    pub fn owner(mut self, cmd_name: impl Into<String>) -> Self {
        self.cmd_name = cmd_name.into();
        self
    }

    /// Set the name used inside derived help sentences.
    /// Defaults to the destination variable name.
    pub fn dest(mut self, opt_dest: impl Into<String>) -> Self {
        self.opt_dest.replace(opt_dest.into());
        self
    }

    /// Set the handler name invoked for a sub-command.
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// Register a formatter for this descriptor's help text.
    ///
    /// ### Example
    /// ```
    /// # use argdesc_builder as argdesc;
    /// use argdesc::{OptionDescriptor, OptionKind};
    ///
    /// let jobs = OptionDescriptor::option(OptionKind::Int, "--jobs")
    ///     .help_hook(|d: &OptionDescriptor| format!("{} worker count", d.opt_dest()));
    ///
    /// assert!(jobs.has_help_hook());
    /// ```
    pub fn help_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&OptionDescriptor) -> String + Send + Sync + 'static,
    {
        self.help_hook.replace(Arc::new(hook));
        self
    }

    /// The long option name.
    pub fn long_opt(&self) -> &str {
        &self.long_opt
    }

    /// The short alias, if any.
    pub fn short_opt(&self) -> Option<&str> {
        self.short_opt.as_deref()
    }

    /// The descriptor's kind.
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// The destination variable name.
    pub fn var_name(&self) -> String {
        match &self.var_name {
            Some(var_name) => var_name.clone(),
            None => self.long_opt.trim_start_matches('-').to_string(),
        }
    }

    /// The default value.
    pub fn default_value(&self) -> &OptionValue {
        &self.value
    }

    /// Whether the option consumes no following value.
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// The explicit help message (empty when help is to be derived).
    pub fn help_info(&self) -> &str {
        &self.help_info
    }

    /// The name of the owning command.
    pub fn cmd_name(&self) -> &str {
        &self.cmd_name
    }

    /// The name used inside derived help sentences.
    pub fn opt_dest(&self) -> String {
        match &self.opt_dest {
            Some(opt_dest) => opt_dest.clone(),
            None => self.var_name(),
        }
    }

    /// The handler name of a sub-command (empty when unset).
    pub fn function_name(&self) -> &str {
        &self.function
    }

    /// Whether this descriptor describes a sub-command.
    pub fn is_cmd(&self) -> bool {
        self.is_cmd
    }

    /// Whether a help formatter is registered.
    pub fn has_help_hook(&self) -> bool {
        self.help_hook.is_some()
    }

    pub(crate) fn hook(&self) -> Option<&HelpHook> {
        self.help_hook.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OptionKind::Bool, true)]
    #[case(OptionKind::Help, true)]
    #[case(OptionKind::String, false)]
    #[case(OptionKind::Int, false)]
    #[case(OptionKind::Args, false)]
    fn option_flag_default(#[case] kind: OptionKind, #[case] expected: bool) {
        let descriptor = OptionDescriptor::option(kind, "--x");
        assert_eq!(descriptor.is_flag(), expected);
        assert!(!descriptor.is_cmd());
    }

    #[test]
    fn option_names() {
        let descriptor = OptionDescriptor::option(OptionKind::String, "--output-dir");
        assert_eq!(descriptor.var_name(), "output-dir");
        assert_eq!(descriptor.opt_dest(), "output-dir");
        assert_eq!(descriptor.short_opt(), None);

        let descriptor = descriptor
            .variable("out_dir")
            .dest("output directory")
            .short("-o");
        assert_eq!(descriptor.var_name(), "out_dir");
        assert_eq!(descriptor.opt_dest(), "output directory");
        assert_eq!(descriptor.short_opt(), Some("-o"));
    }

    #[test]
    fn option_empty_short() {
        let descriptor = OptionDescriptor::option(OptionKind::Int, "--jobs").short("");
        assert_eq!(descriptor.short_opt(), None);
    }

    #[test]
    fn command() {
        let descriptor = OptionDescriptor::command("build");
        assert!(descriptor.is_cmd());
        assert_eq!(descriptor.kind(), &OptionKind::Command);
        assert_eq!(descriptor.cmd_name(), "build");
        assert_eq!(descriptor.long_opt(), "build");
        assert_eq!(descriptor.function_name(), "");
        assert_eq!(descriptor.help_info(), "");
    }

    #[test]
    fn hook_is_invoked_with_descriptor() {
        let descriptor = OptionDescriptor::option(OptionKind::Int, "--jobs")
            .help_hook(|d: &OptionDescriptor| format!("hooked {}", d.long_opt()));
        let hook = descriptor.hook().unwrap();
        assert_eq!(hook(&descriptor), "hooked --jobs");
    }

    #[test]
    fn debug_omits_hook_body() {
        let descriptor =
            OptionDescriptor::option(OptionKind::Int, "--jobs").help_hook(|_| String::default());
        let debug = format!("{descriptor:?}");
        assert!(debug.contains("help_hook: true"), "{debug}");
    }
}
