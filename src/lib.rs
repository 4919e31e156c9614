//! `argdesc` describes command line options and sub-commands declaratively, and lays out argparse-style help text for them.
//!
//! The crate does not parse `argv`.
//! A caller builds a tree of [`CommandNode`]s, each holding [`OptionDescriptor`]s, and asks the tree for:
//! * *Column metrics*: the widths of the name, expression and help columns, as a [`LayoutMetrics`].
//! These may be accumulated across several trees so that their help tables align.
//! * *Help text*: the usage line, an options table, a sub-commands table, and any front-matter, wrapped to a screen width.
//!
//! # Usage
//! ```
//! use argdesc::{CommandNode, HelpOptions, OptionDescriptor, OptionKind};
//!
//! let options = HelpOptions::default().prog("tool");
//! let mut root = CommandNode::root(&options);
//! root.add_option(OptionDescriptor::option(OptionKind::Help, "--help").short("-h"))
//!     .unwrap();
//! root.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose").value(false))
//!     .unwrap();
//! root.add_subcommand(
//!     CommandNode::new(OptionDescriptor::command("build").help("build the project"), &options)
//!         .unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     root.render_help(None, &[]).unwrap(),
//!     r#"usage: tool [OPTIONS] [SUBCOMMANDS]
//!
//! [OPTIONS]
//!     --help|-h  to display this help information
//!     --verbose  verbose set true default(False)
//!
//! [SUBCOMMANDS]
//!     [build] build the project
//! "#
//! );
//! ```
//!
//! # Descriptors
//! An [`OptionDescriptor`] is built once with consuming setters, and is read-only afterwards.
//! Its [`OptionKind`] decides how it is shown:
//! * `bool`, `args`, `dict` and `help` options have no expression column; every other kind shows its destination variable (with `-` replaced by `_`).
//! * `args` options are positional: they appear in the usage line only.
//!
//! The help message of an option is chosen in this order:
//! 1. The explicit message given via [`OptionDescriptor::help`].
//! 2. The output of a hook registered via [`OptionDescriptor::help_hook`].
//! 3. A message derived from the kind and default, for example `"verbose set true default(False)"` or `"level inc"`.
//!
//! An incrementing counter (a `string` option with the default `"+"`) must also be a flag.
//! Otherwise, measuring or rendering fails with [`ConfigError::IncrementWithoutFlag`].
//!
//! # Metrics
//! [`CommandNode::measure`] walks the tree according to a [`Depth`]:
//! `Depth::Levels(0)` measures the node alone, `Depth::Levels(n)` descends `n` levels, and `Depth::Unlimited` descends throughout.
//! The headline (name and help) of each direct sub-command is measured regardless of depth.
//!
//! # Wrapping
//! Help text is wrapped with [`wrap_indented`]: lines break only at whitespace once they reach the screen width, so a long word is never split.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while measuring and rendering.
pub use argdesc_builder::*;
