pub(crate) const ROOT_NAME: &str = "main";
pub(crate) const HELP_MESSAGE: &str = "to display this help information";
pub(crate) const MINIMUM_SCREEN_WIDTH: usize = 40;
pub(crate) const ROW_INDENT: usize = 4;
// Sub-command names are displayed as "[name]".
pub(crate) const CMD_NAME_PADDING: usize = 2;
pub(crate) const COLUMN_PADDING: usize = 1;
// Longer fixed-count positionals collapse to "name [name...]".
pub(crate) const MAX_REPEATED_PLACEHOLDERS: i64 = 16;
