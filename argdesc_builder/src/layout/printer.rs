use std::iter::once;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{CommandNode, OptionDescriptor};
use crate::constant::*;
use crate::error::ConfigError;
use crate::layout::{wrap_indented, LayoutMetrics};
use crate::model::{Depth, OptionKind, OptionValue};

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// The long option, with `|short` appended when there is a short alias.
pub(crate) fn option_name(option: &OptionDescriptor) -> String {
    match option.short_opt() {
        Some(short) => format!("{}|{short}", option.long_opt()),
        None => option.long_opt().to_string(),
    }
}

/// The destination variable, for kinds that take a value.
pub(crate) fn option_expression(option: &OptionDescriptor) -> String {
    if option.kind().shows_expression() {
        option.var_name().replace('-', "_")
    } else {
        String::default()
    }
}

/// The help message of an option.
///
/// An explicit help message wins, then the registered hook, then the message derived from the kind.
pub(crate) fn option_help(option: &OptionDescriptor) -> Result<String, ConfigError> {
    if let Some(hook) = option.hook() {
        if option.help_info().is_empty() {
            return Ok(hook(option));
        }

        return Ok(option.help_info().to_string());
    }

    let derived = derived_help(option)?;

    if option.help_info().is_empty() {
        Ok(derived)
    } else {
        Ok(option.help_info().to_string())
    }
}

fn derived_help(option: &OptionDescriptor) -> Result<String, ConfigError> {
    let dest = option.opt_dest();
    let value = option.default_value();

    match option.kind() {
        OptionKind::Bool => {
            if value.as_bool() {
                Ok(format!("{dest} set false default(True)"))
            } else {
                Ok(format!("{dest} set true default(False)"))
            }
        }
        OptionKind::String if value.is_increment() => {
            if option.is_flag() {
                Ok(format!("{dest} inc"))
            } else {
                Err(ConfigError::IncrementWithoutFlag {
                    cmd_name: option.cmd_name().to_string(),
                    value: value.to_string(),
                })
            }
        }
        OptionKind::Help => Ok(HELP_MESSAGE.to_string()),
        _ => {
            if option.is_flag() {
                Ok(format!("{dest} set default({value})"))
            } else {
                Ok(format!("{dest} command exec"))
            }
        }
    }
}

/// The placeholder shown in the usage line for a positional `args` option.
fn positional_placeholder(option: &OptionDescriptor) -> Option<String> {
    let name = option.var_name().replace('-', "_");

    match option.default_value() {
        OptionValue::Int(n) if *n <= 0 => None,
        OptionValue::Int(n) if *n > MAX_REPEATED_PLACEHOLDERS => {
            Some(format!("{name} [{name}...]"))
        }
        OptionValue::Int(n) => Some(vec![name; *n as usize].join(" ")),
        OptionValue::Str(s) if s == "*" => Some(format!("[{name}...]")),
        OptionValue::Str(s) if s == "+" => Some(format!("{name} [{name}...]")),
        OptionValue::Str(s) if s == "?" => Some(format!("[{name}]")),
        _ => Some(name),
    }
}

#[derive(Debug)]
pub(crate) struct OptionRow {
    name: String,
    expression: String,
    help: String,
}

fn option_rows(node: &CommandNode) -> Result<Vec<OptionRow>, ConfigError> {
    node.options()
        .iter()
        .filter(|option| option.kind() != &OptionKind::Args)
        .map(|option| -> Result<OptionRow, ConfigError> {
            Ok(OptionRow {
                name: option_name(option),
                expression: option_expression(option),
                help: option_help(option)?,
            })
        })
        .collect()
}

pub(crate) fn measure_node(
    node: &CommandNode,
    metrics: &mut LayoutMetrics,
    depth: Depth,
) -> Result<(), ConfigError> {
    let rows = option_rows(node)?;
    measure_with_rows(node, &rows, metrics, depth)
}

fn measure_with_rows(
    node: &CommandNode,
    rows: &[OptionRow],
    metrics: &mut LayoutMetrics,
    depth: Depth,
) -> Result<(), ConfigError> {
    metrics.observe_cmd_name(display_width(node.cmd_name()));
    metrics.observe_cmd_help(display_width(node.help_info()));

    for row in rows {
        metrics.observe_opt_name(display_width(&row.name) + COLUMN_PADDING);
        metrics.observe_opt_expr(display_width(&row.expression) + COLUMN_PADDING);
        metrics.observe_opt_help(display_width(&row.help) + COLUMN_PADDING);
    }

    if let Some(child_depth) = depth.descend() {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Measuring {} sub-command(s) of '{}' at {child_depth:?}.",
                node.subcommands().len(),
                node.cmd_name()
            );
        }

        for subcommand in node.subcommands() {
            measure_node(subcommand, metrics, child_depth)?;
        }
    }

    for subcommand in node.subcommands() {
        metrics.observe_cmd_name(display_width(subcommand.cmd_name()) + CMD_NAME_PADDING);
        metrics.observe_cmd_help(display_width(subcommand.help_info()));
    }

    Ok(())
}

/// Lays out one table row: a left cell, followed by help text wrapped under a hanging indent.
#[derive(Debug)]
struct ColumnRenderer {
    start: usize,
    screen_width: usize,
}

impl ColumnRenderer {
    fn new(start: usize, screen_width: usize) -> Self {
        Self {
            start,
            screen_width,
        }
    }

    fn render(&self, left: &str, help: &str) -> Vec<String> {
        let start = self.start;
        let mut lines: Vec<String> = wrap_indented(help, start, self.screen_width)
            .lines()
            .map(str::to_string)
            .collect();

        if display_width(left) <= start {
            match lines.first_mut() {
                Some(first) => {
                    let rest: String = first.chars().skip(start).collect();
                    *first = format!("{left:<start$}{rest}");
                }
                None => lines.push(left.trim_end().to_string()),
            }
        } else {
            // The left cell overflows its column; the help starts on the next line.
            lines.insert(0, left.trim_end().to_string());
        }

        lines
    }
}

pub(crate) struct HelpPrinter<'a> {
    node: &'a CommandNode,
    metrics: Option<LayoutMetrics>,
    parents: &'a [&'a CommandNode],
}

pub(crate) fn help_printer<'a>(
    node: &'a CommandNode,
    metrics: Option<LayoutMetrics>,
    parents: &'a [&'a CommandNode],
) -> HelpPrinter<'a> {
    HelpPrinter {
        node,
        metrics,
        parents,
    }
}

impl<'a> HelpPrinter<'a> {
    pub(crate) fn render(&self) -> Result<String, ConfigError> {
        let node = self.node;
        let rows = option_rows(node)?;
        let metrics = match self.metrics {
            Some(metrics) => metrics,
            None => {
                let mut metrics = LayoutMetrics::default();
                measure_with_rows(node, &rows, &mut metrics, Depth::default())?;
                metrics
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendering help for '{}' with {metrics:?}.", node.cmd_name());
        }

        let mut sections: Vec<Vec<String>> = Vec::default();
        let mut head = vec![self.usage_line(&rows)];

        if !node.version().is_empty() {
            head.push(node.version().to_string());
        }

        sections.push(head);
        sections.push(self.paragraph(node.description()));

        let prefix = if node.cmd_name().is_empty() {
            String::default()
        } else {
            format!("[{}] ", node.cmd_name())
        };

        if !rows.is_empty() {
            let renderer = ColumnRenderer::new(
                ROW_INDENT + metrics.opt_name_width() + metrics.opt_expr_width(),
                node.screen_width(),
            );
            let mut section = vec![format!("{prefix}[OPTIONS]")];

            for row in &rows {
                let left = format!(
                    "{:indent$}{:<name_width$}{:<expr_width$}",
                    "",
                    row.name,
                    row.expression,
                    indent = ROW_INDENT,
                    name_width = metrics.opt_name_width(),
                    expr_width = metrics.opt_expr_width(),
                );
                section.extend(renderer.render(&left, &row.help));
            }

            sections.push(section);
        }

        if !node.subcommands().is_empty() {
            let name_width = metrics.cmd_name_width() + COLUMN_PADDING;
            let renderer = ColumnRenderer::new(ROW_INDENT + name_width, node.screen_width());
            let mut section = vec![format!("{prefix}[SUBCOMMANDS]")];

            for subcommand in node.subcommands() {
                let left = format!(
                    "{:indent$}{:<name_width$}",
                    "",
                    format!("[{}]", subcommand.cmd_name()),
                    indent = ROW_INDENT,
                );
                section.extend(renderer.render(&left, subcommand.help_info()));
            }

            sections.push(section);
        }

        sections.push(self.paragraph(node.epilog()));

        let mut out = sections
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| section.join("\n"))
            .collect::<Vec<String>>()
            .join("\n\n");
        out.push('\n');
        Ok(out)
    }

    fn program(&self) -> &str {
        self.parents
            .iter()
            .map(|parent| parent.prog())
            .chain(once(self.node.prog()))
            .find(|prog| !prog.is_empty())
            .unwrap_or(ROOT_NAME)
    }

    fn usage_line(&self, rows: &[OptionRow]) -> String {
        let node = self.node;

        if !node.usage().is_empty() {
            return format!("usage: {}", node.usage());
        }

        let mut parts = vec![self.program().to_string()];
        parts.extend(
            self.parents
                .iter()
                .map(|parent| parent.cmd_name())
                .chain(once(node.cmd_name()))
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        );

        if !rows.is_empty() {
            parts.push("[OPTIONS]".to_string());
        }

        if !node.subcommands().is_empty() {
            parts.push("[SUBCOMMANDS]".to_string());
        }

        parts.extend(
            node.options()
                .iter()
                .filter(|option| option.kind() == &OptionKind::Args)
                .filter_map(positional_placeholder),
        );

        format!("usage: {}", parts.join(" "))
    }

    fn paragraph(&self, text: &str) -> Vec<String> {
        wrap_indented(text, 0, self.node.screen_width())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HelpOptions;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn command(name: &str) -> CommandNode {
        CommandNode::new(OptionDescriptor::command(name), &HelpOptions::default()).unwrap()
    }

    #[rstest]
    #[case(OptionDescriptor::option(OptionKind::Bool, "--verbose"), "--verbose")]
    #[case(OptionDescriptor::option(OptionKind::Bool, "--verbose").short("-v"), "--verbose|-v")]
    fn name(#[case] option: OptionDescriptor, #[case] expected: &str) {
        assert_eq!(option_name(&option), expected);
    }

    #[rstest]
    #[case(OptionKind::Bool, "")]
    #[case(OptionKind::Args, "")]
    #[case(OptionKind::Dict, "")]
    #[case(OptionKind::Help, "")]
    #[case(OptionKind::String, "out_dir")]
    #[case(OptionKind::Int, "out_dir")]
    #[case(OptionKind::Float, "out_dir")]
    #[case(OptionKind::List, "out_dir")]
    #[case(OptionKind::Other("path".to_string()), "out_dir")]
    fn expression(#[case] kind: OptionKind, #[case] expected: &str) {
        let option = OptionDescriptor::option(kind, "--out-dir");
        assert_eq!(option_expression(&option), expected);
    }

    #[rstest]
    #[case(true, "verbose set false default(True)")]
    #[case(false, "verbose set true default(False)")]
    fn help_bool(#[case] default: bool, #[case] expected: &str) {
        let option = OptionDescriptor::option(OptionKind::Bool, "--verbose").value(default);
        assert_eq!(option_help(&option).unwrap(), expected);
    }

    #[test]
    fn help_bool_without_default() {
        let option = OptionDescriptor::option(OptionKind::Bool, "--verbose");
        assert_eq!(
            option_help(&option).unwrap(),
            "verbose set true default(False)"
        );
    }

    #[test]
    fn help_increment_flag() {
        let option = OptionDescriptor::option(OptionKind::String, "--level")
            .value("+")
            .flag(true);
        assert_eq!(option_help(&option).unwrap(), "level inc");
    }

    #[test]
    fn help_increment_not_flag() {
        let option = OptionDescriptor::option(OptionKind::String, "--level")
            .value("+")
            .owner("build");
        let error = option_help(&option).unwrap_err();
        assert_matches!(
            error,
            ConfigError::IncrementWithoutFlag { cmd_name, value } if cmd_name == "build" && value == "+"
        );
    }

    #[test]
    fn help_help() {
        let option = OptionDescriptor::option(OptionKind::Help, "--help");
        assert_eq!(
            option_help(&option).unwrap(),
            "to display this help information"
        );
    }

    #[rstest]
    #[case(OptionKind::Int, OptionValue::Int(4), "jobs set default(4)")]
    #[case(OptionKind::Float, OptionValue::Float(0.5), "jobs set default(0.5)")]
    #[case(OptionKind::String, OptionValue::from("x"), "jobs set default(x)")]
    #[case(OptionKind::List, OptionValue::List(vec![]), "jobs set default([])")]
    #[case(OptionKind::Other("odd".to_string()), OptionValue::Null, "jobs set default()")]
    fn help_flag_default(
        #[case] kind: OptionKind,
        #[case] value: OptionValue,
        #[case] expected: &str,
    ) {
        let option = OptionDescriptor::option(kind, "--jobs")
            .value(value)
            .flag(true);
        assert_eq!(option_help(&option).unwrap(), expected);
    }

    #[rstest]
    #[case(OptionKind::Int)]
    #[case(OptionKind::Other("odd".to_string()))]
    fn help_command_exec(#[case] kind: OptionKind) {
        let option = OptionDescriptor::option(kind, "--jobs").dest("job count");
        assert_eq!(option_help(&option).unwrap(), "job count command exec");
    }

    #[test]
    fn help_hook() {
        let option = OptionDescriptor::option(OptionKind::Bool, "--verbose")
            .help_hook(|d: &OptionDescriptor| format!("custom {}", d.opt_dest()));
        assert_eq!(option_help(&option).unwrap(), "custom verbose");
    }

    #[test]
    fn help_hook_skips_increment_check() {
        let option = OptionDescriptor::option(OptionKind::String, "--level")
            .value("+")
            .help_hook(|_| "hooked".to_string());
        assert_eq!(option_help(&option).unwrap(), "hooked");
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn help_explicit_wins(#[case] with_hook: bool) {
        let mut option = OptionDescriptor::option(OptionKind::Bool, "--verbose")
            .value(true)
            .help("be chatty");
        if with_hook {
            option = option.help_hook(|_| "hooked".to_string());
        }
        assert_eq!(option_help(&option).unwrap(), "be chatty");
    }

    #[rstest]
    #[case(OptionValue::Int(0), None)]
    #[case(OptionValue::Int(-5), None)]
    #[case(OptionValue::Int(2), Some("files files"))]
    #[case(OptionValue::Int(16), Some("files files files files files files files files files files files files files files files files"))]
    #[case(OptionValue::Int(17), Some("files [files...]"))]
    #[case(OptionValue::Int(i64::MAX), Some("files [files...]"))]
    #[case(OptionValue::from("*"), Some("[files...]"))]
    #[case(OptionValue::from("+"), Some("files [files...]"))]
    #[case(OptionValue::from("?"), Some("[files]"))]
    #[case(OptionValue::Null, Some("files"))]
    fn placeholder(#[case] value: OptionValue, #[case] expected: Option<&str>) {
        let option = OptionDescriptor::option(OptionKind::Args, "files").value(value);
        assert_eq!(positional_placeholder(&option).as_deref(), expected);
    }

    #[test]
    fn measure_scenario() {
        let options = HelpOptions::default();
        let mut root = CommandNode::root(&options);
        root.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose").value(false))
            .unwrap();
        root.add_subcommand(
            CommandNode::new(
                OptionDescriptor::command("build").help("build the project"),
                &options,
            )
            .unwrap(),
        )
        .unwrap();

        let mut metrics = LayoutMetrics::default();
        measure_node(&root, &mut metrics, Depth::Levels(0)).unwrap();

        assert_eq!(metrics.opt_name_width(), "--verbose".len() + 1);
        assert_eq!(metrics.opt_expr_width(), 1);
        assert_eq!(
            metrics.opt_help_width(),
            "verbose set true default(False)".len() + 1
        );
        assert_eq!(metrics.cmd_name_width(), "build".len() + 2);
        assert_eq!(metrics.cmd_help_width(), "build the project".len());
    }

    #[test]
    fn measure_skips_args() {
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_option(
            OptionDescriptor::option(OptionKind::Args, "a-very-long-positional-name")
                .help("a very long positional help message"),
        )
        .unwrap();

        let mut metrics = LayoutMetrics::default();
        measure_node(&root, &mut metrics, Depth::Unlimited).unwrap();
        assert_eq!(metrics, LayoutMetrics::default());
    }

    #[test]
    fn measure_depth() {
        let mut grandchild = command("leaf");
        grandchild
            .add_option(OptionDescriptor::option(OptionKind::Int, "--grandchild-option-name"))
            .unwrap();
        let mut child = command("branch");
        child
            .add_option(OptionDescriptor::option(OptionKind::Int, "--child-opt"))
            .unwrap();
        child.add_subcommand(grandchild).unwrap();
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_option(OptionDescriptor::option(OptionKind::Int, "--r"))
            .unwrap();
        root.add_subcommand(child).unwrap();

        let shallow = root.measure(Depth::Levels(0)).unwrap();
        assert_eq!(shallow.opt_name_width(), "--r".len() + 1);
        assert_eq!(shallow.cmd_name_width(), "branch".len() + 2);

        let one = root.measure(Depth::Levels(1)).unwrap();
        assert_eq!(one.opt_name_width(), "--child-opt".len() + 1);
        assert_eq!(one.cmd_name_width(), "branch".len() + 2);
        assert_eq!(one.cmd_help_width(), "branch handler".len());

        let deep = root.measure(Depth::Unlimited).unwrap();
        assert_eq!(deep.opt_name_width(), "--grandchild-option-name".len() + 1);

        assert!(one.covers(&shallow));
        assert!(deep.covers(&one));
    }

    #[test]
    fn measure_accumulates() {
        let mut a = CommandNode::root(&HelpOptions::default());
        a.add_option(OptionDescriptor::option(OptionKind::Int, "--longer-name"))
            .unwrap();
        let mut b = CommandNode::root(&HelpOptions::default());
        b.add_option(OptionDescriptor::option(OptionKind::Int, "--n").help("a long help message"))
            .unwrap();

        let mut metrics = LayoutMetrics::default();
        a.measure_into(&mut metrics, Depth::Levels(0)).unwrap();
        b.measure_into(&mut metrics, Depth::Levels(0)).unwrap();

        assert_eq!(metrics.opt_name_width(), "--longer-name".len() + 1);
        assert_eq!(metrics.opt_help_width(), "a long help message".len() + 1);
    }

    #[test]
    fn measure_propagates_error() {
        let mut child = command("build");
        child
            .add_option(
                OptionDescriptor::option(OptionKind::String, "--level")
                    .value("+")
                    .owner("build"),
            )
            .unwrap();
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_subcommand(child).unwrap();

        assert!(root.measure(Depth::Levels(0)).is_ok());
        assert_matches!(
            root.measure(Depth::Unlimited),
            Err(ConfigError::IncrementWithoutFlag { .. })
        );
    }

    #[test]
    fn render_basic() {
        let options = HelpOptions::default().prog("tool");
        let mut root = CommandNode::root(&options);
        root.add_option(OptionDescriptor::option(OptionKind::Help, "--help").short("-h"))
            .unwrap();
        root.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose").value(false))
            .unwrap();
        root.add_subcommand(
            CommandNode::new(
                OptionDescriptor::command("build").help("build the project"),
                &options,
            )
            .unwrap(),
        )
        .unwrap();

        let message = root.render_help(None, &[]).unwrap();

        assert_eq!(
            message,
            r#"usage: tool [OPTIONS] [SUBCOMMANDS]

[OPTIONS]
    --help|-h  to display this help information
    --verbose  verbose set true default(False)

[SUBCOMMANDS]
    [build] build the project
"#
        );
    }

    #[test]
    fn render_wrapped() {
        let mut root = CommandNode::root(&HelpOptions::default().prog("tool"));
        root.add_option(
            OptionDescriptor::option(OptionKind::String, "--output")
                .value("/tmp/out")
                .flag(true)
                .help("directory where the compiled artifacts and intermediate files are written"),
        )
        .unwrap();

        let message = root.render_help(None, &[]).unwrap();

        assert_eq!(
            message,
            r#"usage: tool [OPTIONS]

[OPTIONS]
    --output output directory where the compiled
                    artifacts and intermediate
                    files are written
"#
        );
    }

    #[test]
    fn render_subcommand_with_parents() {
        let root = CommandNode::root(&HelpOptions::default().prog("tool"));
        let mut remote = command("remote");
        remote
            .add_option(
                OptionDescriptor::option(OptionKind::Int, "--timeout")
                    .value(30)
                    .flag(true),
            )
            .unwrap();
        remote
            .add_option(OptionDescriptor::option(OptionKind::Args, "urls").value("+"))
            .unwrap();
        remote.add_subcommand(command("add")).unwrap();

        let message = remote.render_help(None, &[&root]).unwrap();

        assert_eq!(
            message,
            r#"usage: tool remote [OPTIONS] [SUBCOMMANDS] urls [urls...]

[remote] [OPTIONS]
    --timeout timeout timeout set default(30)

[remote] [SUBCOMMANDS]
    [add]  add handler
"#
        );
    }

    #[test]
    fn render_front_matter() {
        let root = CommandNode::root(&HelpOptions::default())
            .with_usage("tool [stuff]")
            .with_version("tool 1.2.3")
            .with_description("Does things.")
            .with_epilog("See the manual.");

        let message = root.render_help(None, &[]).unwrap();

        assert_eq!(
            message,
            "usage: tool [stuff]\ntool 1.2.3\n\nDoes things.\n\nSee the manual.\n"
        );
    }

    #[test]
    fn render_narrow_metrics() {
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose"))
            .unwrap();

        let message = root
            .render_help(Some(&LayoutMetrics::default()), &[])
            .unwrap();

        assert_eq!(
            message,
            "usage: main [OPTIONS]\n\n[OPTIONS]\n    --verbose\n    verbose set true default(False)\n"
        );
    }

    #[test]
    fn render_shared_metrics_align() {
        let options = HelpOptions::default();
        let mut root = CommandNode::root(&options);
        root.add_option(OptionDescriptor::option(OptionKind::Bool, "--q"))
            .unwrap();
        let mut child = command("child");
        child
            .add_option(OptionDescriptor::option(OptionKind::Bool, "--much-longer"))
            .unwrap();
        root.add_subcommand(child).unwrap();

        let metrics = root.measure(Depth::Unlimited).unwrap();
        let root_help = root.render_help(Some(&metrics), &[]).unwrap();
        let child_help = root.subcommands()[0]
            .render_help(Some(&metrics), &[&root])
            .unwrap();

        let column = |message: &str, needle: &str| {
            message
                .lines()
                .find(|line| line.contains(needle))
                .and_then(|line| line.find(needle))
                .unwrap()
        };
        assert_eq!(
            column(&root_help, "q set true"),
            column(&child_help, "much-longer set true")
        );
    }

    #[test]
    fn render_hook_invoked_once_per_option() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_option(
            OptionDescriptor::option(OptionKind::Int, "--jobs").help_hook(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                "worker count".to_string()
            }),
        )
        .unwrap();

        let message = root.render_help(None, &[]).unwrap();

        assert_contains!(message, "worker count");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn render_huge_positional_count() {
        let mut root = CommandNode::root(&HelpOptions::default().prog("tool"));
        root.add_option(OptionDescriptor::option(OptionKind::Args, "files").value(i64::MAX))
            .unwrap();

        let message = root.render_help(None, &[]).unwrap();
        assert_eq!(message, "usage: tool files [files...]\n");
    }

    #[test]
    fn render_wide_left_column_no_blank_rows() {
        let mut root = CommandNode::root(&HelpOptions::default().prog("tool"));
        root.add_option(
            OptionDescriptor::option(OptionKind::String, "--a-particularly-long-option-name")
                .variable("a_rather_long_destination")
                .help("first  second\t third"),
        )
        .unwrap();

        let message = root.render_help(None, &[]).unwrap();
        let rows: Vec<&str> = message
            .lines()
            .skip_while(|line| *line != "[OPTIONS]")
            .skip(1)
            .collect();

        assert_eq!(rows.len(), 3, "{message}");
        assert!(rows[0].ends_with("a_rather_long_destination first"), "{message}");
        for line in rows {
            assert!(!line.trim().is_empty(), "{message}");
        }
    }

    #[test]
    fn render_error() {
        let mut root = CommandNode::root(&HelpOptions::default());
        root.add_option(OptionDescriptor::option(OptionKind::String, "--level").value("+"))
            .unwrap();

        assert_matches!(
            root.render_help(None, &[]),
            Err(ConfigError::IncrementWithoutFlag { .. })
        );
    }

    #[test]
    fn render_lines_within_reason() {
        let mut root = CommandNode::root(&HelpOptions::default().screen_width(60));
        root.add_option(
            OptionDescriptor::option(OptionKind::Int, "--jobs")
                .help("the number of jobs to run in parallel while building every target in the workspace"),
        )
        .unwrap();

        let message = root.render_help(None, &[]).unwrap();
        let rows: Vec<&str> = message.lines().skip(3).collect();

        assert!(rows.len() > 1, "{message}");
        for line in &rows[1..] {
            assert!(line.starts_with("                "), "'{line}'");
        }
    }
}
