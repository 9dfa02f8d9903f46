use crate::error::Error;
use serde::{Deserialize, Serialize, Serializer};
use std::{borrow::Cow, fmt};

/// Identifier of a timer.
///
/// A `Symbol` is an identifier token and is displayed as `:name` (quoted as
/// `:"cool neat"` when it is not a plain identifier), `Text` is an arbitrary
/// string and is displayed quoted. `Symbol("a")` and `Text("a")` are
/// different timers.
///
/// String literals become symbols and owned strings become text:
///
/// ```
/// use timeup::TimerName;
///
/// assert_eq!(TimerName::from("build").to_string(), ":build");
/// assert_eq!(TimerName::from("cool neat".to_string()).to_string(), "\"cool neat\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "serde_yaml::Value")]
pub enum TimerName {
    Symbol(Cow<'static, str>),
    Text(String),
}

impl TimerName {
    pub fn symbol(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::Text(name.into())
    }

    /// The bare identifier, without the `:` or quotes used for display
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbol(name) => name,
            Self::Text(name) => name,
        }
    }
}

/// `foo`, `_bar9`, `valid?`, `save!` and `name=` print bare after the colon
fn is_plain_symbol(name: &str) -> bool {
    let body = name
        .strip_suffix(|c: char| matches!(c, '?' | '!' | '='))
        .unwrap_or(name);
    let mut chars = body.chars();

    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for TimerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) if is_plain_symbol(name) => write!(f, ":{name}"),
            Self::Symbol(name) => write!(f, ":{name:?}"),
            Self::Text(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<&'static str> for TimerName {
    fn from(name: &'static str) -> Self {
        Self::Symbol(Cow::Borrowed(name))
    }
}

impl From<String> for TimerName {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

impl From<&TimerName> for TimerName {
    fn from(name: &TimerName) -> Self {
        name.clone()
    }
}

/// Names coming from config files: `":build"` is a symbol, any other string is
/// text, and every non-string value is rejected.
impl TryFrom<serde_yaml::Value> for TimerName {
    type Error = Error;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;

        let kind = match value {
            Value::String(s) => {
                let symbol = s
                    .strip_prefix(':')
                    .filter(|rest| !rest.is_empty())
                    .map(str::to_owned);

                return Ok(match symbol {
                    Some(symbol) => Self::Symbol(Cow::Owned(symbol)),
                    None => Self::Text(s),
                });
            }
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tagged(_) => "tagged",
        };

        Err(Error::InvalidNameKind { kind })
    }
}

impl Serialize for TimerName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
