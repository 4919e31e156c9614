#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The column widths needed to align a help table.
///
/// Each width is a running maximum: observing a narrower value never shrinks it.
/// A single `LayoutMetrics` may be threaded through several command trees to align them together.
///
/// ### Example
/// ```
/// # use argdesc_builder as argdesc;
/// use argdesc::{CommandNode, Depth, HelpOptions, LayoutMetrics, OptionDescriptor, OptionKind};
///
/// let options = HelpOptions::default();
/// let mut wide = CommandNode::root(&options);
/// wide.add_option(OptionDescriptor::option(OptionKind::Bool, "--verbose")).unwrap();
/// let mut narrow = CommandNode::root(&options);
/// narrow.add_option(OptionDescriptor::option(OptionKind::Bool, "--dry")).unwrap();
///
/// let mut metrics = LayoutMetrics::default();
/// wide.measure_into(&mut metrics, Depth::Levels(0)).unwrap();
/// narrow.measure_into(&mut metrics, Depth::Levels(0)).unwrap();
///
/// assert_eq!(metrics.opt_name_width(), "--verbose".len() + 1);
/// assert!(metrics.covers(&narrow.measure(Depth::Levels(0)).unwrap()));
/// ```
///
/// Only measuring a command widens the columns.
/// ```compile_fail
/// # use argdesc_builder as argdesc;
/// let mut metrics = argdesc::LayoutMetrics::default();
/// metrics.observe_opt_name(10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutMetrics {
    cmd_name_width: usize,
    cmd_help_width: usize,
    opt_name_width: usize,
    opt_expr_width: usize,
    opt_help_width: usize,
}

fn widen(current: &mut usize, width: usize, _column: &str) {
    if *current < width {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Widening column {_column}: {current} -> {width}.");
        }

        *current = width;
    }
}

impl LayoutMetrics {
    /// Widest sub-command name column.
    pub fn cmd_name_width(&self) -> usize {
        self.cmd_name_width
    }

    /// Widest sub-command help.
    pub fn cmd_help_width(&self) -> usize {
        self.cmd_help_width
    }

    /// Widest option name column.
    pub fn opt_name_width(&self) -> usize {
        self.opt_name_width
    }

    /// Widest option expression column.
    pub fn opt_expr_width(&self) -> usize {
        self.opt_expr_width
    }

    /// Widest option help.
    pub fn opt_help_width(&self) -> usize {
        self.opt_help_width
    }

    /// Observe a sub-command name width.
    pub(crate) fn observe_cmd_name(&mut self, width: usize) {
        widen(&mut self.cmd_name_width, width, "cmd_name");
    }

    /// Observe a sub-command help width.
    pub(crate) fn observe_cmd_help(&mut self, width: usize) {
        widen(&mut self.cmd_help_width, width, "cmd_help");
    }

    /// Observe an option name width.
    pub(crate) fn observe_opt_name(&mut self, width: usize) {
        widen(&mut self.opt_name_width, width, "opt_name");
    }

    /// Observe an option expression width.
    pub(crate) fn observe_opt_expr(&mut self, width: usize) {
        widen(&mut self.opt_expr_width, width, "opt_expr");
    }

    /// Observe an option help width.
    pub(crate) fn observe_opt_help(&mut self, width: usize) {
        widen(&mut self.opt_help_width, width, "opt_help");
    }

    /// Whether every column of `self` is at least as wide as the matching column of `other`.
    pub fn covers(&self, other: &LayoutMetrics) -> bool {
        self.cmd_name_width >= other.cmd_name_width
            && self.cmd_help_width >= other.cmd_help_width
            && self.opt_name_width >= other.opt_name_width
            && self.opt_expr_width >= other.opt_expr_width
            && self.opt_help_width >= other.opt_help_width
    }
}
