//! Field name specifications and their validation.

use std::{fmt, rc::Rc};

use hashbrown::HashMap;
use tracing::trace;

use crate::{lexer, Error, InvalidName};

/// Anything that can specify the fields of a record type.
///
/// Strings are split on whitespace and commas, so `"name weight owner"` and
/// `"name, weight, owner"` both declare three fields. Collections of strings are taken verbatim,
/// one field per element.
pub trait IntoFieldNames {
    /// Returns the candidate field names, in declaration order. The names are not validated yet.
    fn into_candidates(self) -> Vec<Rc<str>>;
}

impl IntoFieldNames for &str {
    fn into_candidates(self) -> Vec<Rc<str>> {
        lexer::split_field_list(self).map(Rc::from).collect()
    }
}

impl IntoFieldNames for String {
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_str().into_candidates()
    }
}

impl IntoFieldNames for &String {
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_str().into_candidates()
    }
}

impl<S> IntoFieldNames for Vec<S>
where
    S: AsRef<str>,
{
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_slice().into_candidates()
    }
}

impl<S> IntoFieldNames for &[S]
where
    S: AsRef<str>,
{
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.iter().map(|name| Rc::from(name.as_ref())).collect()
    }
}

impl<S> IntoFieldNames for &Vec<S>
where
    S: AsRef<str>,
{
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_slice().into_candidates()
    }
}

impl<S, const N: usize> IntoFieldNames for [S; N]
where
    S: AsRef<str>,
{
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_slice().into_candidates()
    }
}

impl<S, const N: usize> IntoFieldNames for &[S; N]
where
    S: AsRef<str>,
{
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.as_slice().into_candidates()
    }
}

/// Field names collected from an iterator.
///
/// Like any other collection, each element declares one field and is not split.
///
/// ```
/// use recordtype::{validate, FieldList};
///
/// let columns = ["id", "name", "email"];
/// let fields = validate(columns.iter().skip(1).collect::<FieldList>()).unwrap();
/// assert_eq!(fields.iter().collect::<Vec<_>>(), ["name", "email"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(Vec<Rc<str>>);

impl<S> FromIterator<S> for FieldList
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(|name| Rc::from(name.as_ref())).collect())
    }
}

impl IntoFieldNames for FieldList {
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.0
    }
}

impl IntoFieldNames for &FieldNames {
    fn into_candidates(self) -> Vec<Rc<str>> {
        self.names.clone()
    }
}

/// An ordered sequence of validated field names.
///
/// The order of the names is the order in which positional arguments are bound, values are
/// iterated, and fields are displayed.
#[derive(Clone)]
pub struct FieldNames {
    names: Vec<Rc<str>>,
    index: HashMap<Rc<str>, usize>,
}

impl FieldNames {
    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the position of the field with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns whether a field with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the name of the field at the given position.
    pub fn get(&self, position: usize) -> Option<&Rc<str>> {
        self.names.get(position)
    }

    /// Returns the names as a slice.
    pub fn as_slice(&self) -> &[Rc<str>] {
        &self.names
    }

    /// Iterates over the names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
}

impl fmt::Debug for FieldNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for FieldNames {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for FieldNames {}

/// Validates a field specification, producing the ordered sequence of names it declares.
///
/// # Errors
/// [`Error::InvalidFieldName`] if any name is not an identifier, is a keyword, or is declared
/// more than once.
///
/// # Examples
/// ```
/// let fields = recordtype::validate("name, weight owner").unwrap();
/// assert_eq!(fields.iter().collect::<Vec<_>>(), ["name", "weight", "owner"]);
///
/// assert!(recordtype::validate(["2name", "weight"]).is_err());
/// ```
pub fn validate(spec: impl IntoFieldNames) -> Result<FieldNames, Error> {
    let names = spec.into_candidates();
    let mut index = HashMap::with_capacity(names.len());
    for (position, name) in names.iter().enumerate() {
        lexer::check_identifier(name)
            .map_err(|reason| Error::InvalidFieldName { name: Rc::clone(name), reason })?;
        if index.insert(Rc::clone(name), position).is_some() {
            return Err(Error::InvalidFieldName {
                name: Rc::clone(name),
                reason: InvalidName::Duplicate,
            });
        }
    }
    trace!(fields = ?names, "validated field names");
    Ok(FieldNames { names, index })
}
