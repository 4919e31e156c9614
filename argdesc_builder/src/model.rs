use std::convert::Infallible;
use std::str::FromStr;

/// The classification of an option/command descriptor.
///
/// The kind selects how the descriptor is presented in help output.
/// Unrecognized kinds are retained as [`OptionKind::Other`] and rendered via the generic branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// A toggle; presence flips the default.
    Bool,
    /// A string value, or an incrementing counter when the default is `"+"`.
    String,
    /// Positional arguments.
    Args,
    /// A key/value mapping.
    Dict,
    /// The help flag.
    Help,
    /// An integer value.
    Int,
    /// A floating point value.
    Float,
    /// A list of values.
    List,
    /// A sub-command.
    Command,
    /// Anything else.
    Other(String),
}

impl OptionKind {
    /// Whether this kind has an expression column (the destination variable) in help output.
    pub fn shows_expression(&self) -> bool {
        !matches!(
            self,
            OptionKind::Bool | OptionKind::Args | OptionKind::Dict | OptionKind::Help
        )
    }
}

impl FromStr for OptionKind {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "bool" => OptionKind::Bool,
            "string" => OptionKind::String,
            "args" => OptionKind::Args,
            "dict" => OptionKind::Dict,
            "help" => OptionKind::Help,
            "int" => OptionKind::Int,
            "float" => OptionKind::Float,
            "list" => OptionKind::List,
            "command" => OptionKind::Command,
            other => OptionKind::Other(other.to_string()),
        })
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OptionKind::Bool => "bool",
            OptionKind::String => "string",
            OptionKind::Args => "args",
            OptionKind::Dict => "dict",
            OptionKind::Help => "help",
            OptionKind::Int => "int",
            OptionKind::Float => "float",
            OptionKind::List => "list",
            OptionKind::Command => "command",
            OptionKind::Other(other) => other.as_str(),
        };
        write!(f, "{name}")
    }
}

/// The default value carried by a descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionValue {
    /// No default.
    #[default]
    Null,
    /// A boolean default.
    Bool(bool),
    /// An integer default.
    Int(i64),
    /// A floating point default.
    Float(f64),
    /// A string default.
    /// For [`OptionKind::String`], the literal `"+"` marks an incrementing counter.
    Str(String),
    /// A list default.
    List(Vec<OptionValue>),
    /// A mapping default, in insertion order.
    Dict(Vec<(String, OptionValue)>),
}

pub(crate) const INCREMENT_SENTINEL: &str = "+";

impl OptionValue {
    pub(crate) fn is_increment(&self) -> bool {
        matches!(self, OptionValue::Str(s) if s == INCREMENT_SENTINEL)
    }

    /// Interpret this value as a boolean; anything other than `Bool(true)` is false.
    pub fn as_bool(&self) -> bool {
        matches!(self, OptionValue::Bool(true))
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Null => Ok(()),
            OptionValue::Bool(true) => write!(f, "True"),
            OptionValue::Bool(false) => write!(f, "False"),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Str(s) => write!(f, "{s}"),
            OptionValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            OptionValue::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// How far to descend into sub-commands when measuring a command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Descend at most `N` levels; `Levels(0)` measures only the node itself.
    Levels(usize),
    /// Descend through the whole tree.
    Unlimited,
}

impl Depth {
    /// The depth to use for the children of a node measured at this depth.
    /// Returns `None` when the children must not be descended into.
    pub(crate) fn descend(&self) -> Option<Depth> {
        match self {
            Depth::Levels(0) => None,
            Depth::Levels(n) => Some(Depth::Levels(n - 1)),
            Depth::Unlimited => Some(Depth::Unlimited),
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Levels(0)
    }
}

/// Negative values descend without limit.
impl From<i32> for Depth {
    fn from(value: i32) -> Self {
        if value < 0 {
            Depth::Unlimited
        } else {
            Depth::Levels(value as usize)
        }
    }
}
