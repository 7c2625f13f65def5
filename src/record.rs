use std::{fmt, iter::FusedIterator, rc::Rc, slice};

use tracing::debug;

use crate::{validate, Arguments, Binding, Error, FieldNames, IntoFieldNames, Value};

/// Options controlling the behavior of a record type's instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordOptions {
    /// How constructor arguments are matched to fields.
    pub binding: Binding,
}

/// A record type: a name and a fixed, ordered set of fields.
///
/// Record types are created at runtime by [`record_factory`] (or [`RecordType::with_options`]),
/// and are shared between their instances through an [`Rc`].
pub struct RecordType {
    name: Rc<str>,
    fields: FieldNames,
    options: RecordOptions,
}

impl RecordType {
    /// Creates a new record type with the default options. This is the same as
    /// [`record_factory`].
    pub fn new(name: impl AsRef<str>, fields: impl IntoFieldNames) -> Result<Rc<Self>, Error> {
        Self::with_options(name, fields, RecordOptions::default())
    }

    /// Creates a new record type with the provided options.
    ///
    /// The name is used verbatim and is not required to be an identifier.
    ///
    /// # Errors
    /// [`Error::InvalidFieldName`] if the field specification is invalid (see [`validate`].)
    ///
    /// # Examples
    /// ```
    /// use recordtype::{args, Binding, RecordOptions, RecordType};
    ///
    /// let options = RecordOptions { binding: Binding::Lenient };
    /// let point = RecordType::with_options("Point", "x y", options).unwrap();
    /// let origin = point.construct(args![]).unwrap();
    /// assert_eq!(origin.to_string(), "Point(x=nil, y=nil)");
    /// ```
    pub fn with_options(
        name: impl AsRef<str>,
        fields: impl IntoFieldNames,
        options: RecordOptions,
    ) -> Result<Rc<Self>, Error> {
        let fields = validate(fields)?;
        let name = name.as_ref();
        debug!(type_name = name, fields = fields.len(), ?options, "created record type");
        Ok(Rc::new(Self { name: Rc::from(name), fields, options }))
    }

    /// Returns the name of the record type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields declared by the record type.
    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    /// Returns the options the record type was created with.
    pub fn options(&self) -> RecordOptions {
        self.options
    }

    /// Constructs a new instance of the record type.
    ///
    /// Positional arguments are bound to fields in declaration order, and the remaining fields
    /// are bound by name from the keyword arguments.
    ///
    /// # Errors
    /// With [`Binding::Strict`]:
    /// - [`Error::TooManyArguments`] if there are more positional arguments than fields.
    /// - [`Error::DuplicateArgument`] if a field receives both a positional and a keyword
    ///   argument, or the same keyword is passed twice.
    /// - [`Error::MissingArgument`] if a field does not receive any value.
    /// - [`Error::UnexpectedArgument`] if a keyword argument does not name a field.
    ///
    /// [`Binding::Lenient`] never fails.
    pub fn construct(self: &Rc<Self>, arguments: Arguments) -> Result<Record, Error> {
        let fields = self.options.binding.bind(&self.name, &self.fields, arguments)?;
        Ok(Record { record_type: Rc::clone(self), fields })
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("options", &self.options)
            .finish()
    }
}

/// Creates a new record type with the given name and fields.
///
/// Fields can be specified as a single string of names separated by whitespace or commas, or as
/// a collection of names.
///
/// # Examples
/// ```
/// use recordtype::{args, record_factory};
///
/// let dog = record_factory("Dog", "name weight owner").unwrap();
/// let mut rex = dog.construct(args!["Rex", 30, "Bob"]).unwrap();
/// assert_eq!(rex.to_string(), "Dog(name='Rex', weight=30, owner='Bob')");
///
/// rex.set("weight", 32).unwrap();
/// assert_eq!(rex.to_string(), "Dog(name='Rex', weight=32, owner='Bob')");
///
/// assert!(record_factory("Cat", ["2name", "weight", "owner"]).is_err());
/// ```
pub fn record_factory(
    name: impl AsRef<str>,
    fields: impl IntoFieldNames,
) -> Result<Rc<RecordType>, Error> {
    RecordType::new(name, fields)
}

/// An instance of a [`RecordType`].
#[derive(Clone)]
pub struct Record {
    record_type: Rc<RecordType>,
    // Always has exactly one value per field, in declaration order.
    fields: Vec<Value>,
}

impl Record {
    /// Returns the type of this record.
    pub fn record_type(&self) -> &Rc<RecordType> {
        &self.record_type
    }

    /// Returns the name of this record's type.
    pub fn type_name(&self) -> &str {
        self.record_type.name()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, Error> {
        self.record_type.fields.position(name).ok_or_else(|| Error::NoSuchField {
            type_name: Rc::clone(&self.record_type.name),
            name: Rc::from(name),
        })
    }

    /// Returns the value of the field with the given name.
    pub fn get(&self, name: &str) -> Result<&Value, Error> {
        let position = self.position(name)?;
        Ok(&self.fields[position])
    }

    /// Sets the value of the field with the given name.
    ///
    /// # Errors
    /// [`Error::NoSuchField`] if the record type does not declare a field with the given name.
    /// Records cannot gain new fields.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), Error> {
        let position = self.position(name)?;
        self.fields[position] = value.into();
        Ok(())
    }

    /// Returns the value of the field at the given position.
    pub fn get_index(&self, position: usize) -> Option<&Value> {
        self.fields.get(position)
    }

    /// Returns a mutable reference to the value of the field at the given position.
    pub fn get_index_mut(&mut self, position: usize) -> Option<&mut Value> {
        self.fields.get_mut(position)
    }

    /// Returns the field values as a slice, in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.fields
    }

    /// Iterates over the field values in declaration order.
    pub fn iter(&self) -> Values<'_> {
        Values { inner: self.fields.iter() }
    }

    /// Iterates over pairs of field names and values in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.record_type.fields.iter().zip(&self.fields)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name())?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Records are equal if they are of the same record type and all their fields are equal.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record_type, &other.record_type) && self.fields == other.fields
    }
}

/// An iterator over the values of a record's fields.
#[derive(Clone)]
pub struct Values<'r> {
    inner: slice::Iter<'r, Value>,
}

impl<'r> Iterator for Values<'r> {
    type Item = &'r Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

impl<'r> IntoIterator for &'r Record {
    type Item = &'r Value;
    type IntoIter = Values<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Record {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
