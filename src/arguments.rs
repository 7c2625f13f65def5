use std::rc::Rc;

use crate::Value;

/// Arguments passed to a record constructor: values bound by position, followed by values bound
/// by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: Vec<(Rc<str>, Value)>,
}

impl Arguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Appends a keyword argument.
    pub fn keyword(mut self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    /// Returns the positional arguments.
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the keyword arguments, in the order they were passed.
    pub fn keyword_values(&self) -> &[(Rc<str>, Value)] {
        &self.keyword
    }

    pub(crate) fn into_parts(self) -> (Vec<Value>, Vec<(Rc<str>, Value)>) {
        (self.positional, self.keyword)
    }
}

/// Collects values into positional arguments.
impl<V> FromIterator<V> for Arguments
where
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self { positional: iter.into_iter().map(Into::into).collect(), keyword: Vec::new() }
    }
}

/// Builds an [`Arguments`] list.
///
/// Positional arguments come first, separated by commas. Keyword arguments follow a semicolon.
///
/// # Examples
/// ```
/// use recordtype::args;
///
/// let all_positional = args!["Rex", 30, "Bob"];
/// let mixed = args!["Rex", 30; owner = "Bob"];
/// let all_keyword = args![; owner = "Bob", name = "Rex", weight = 30];
/// assert_eq!(mixed.positional_values().len(), 2);
/// assert_eq!(all_keyword.keyword_values().len(), 3);
/// # let _ = all_positional;
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)? $(; $($name:ident = $keyword_value:expr),* $(,)?)?) => {
        $crate::Arguments::new()
            $(.positional($value))*
            $($(.keyword(stringify!($name), $keyword_value))*)?
    };
}
