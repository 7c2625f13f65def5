//! Error reporting.

use std::{fmt, rc::Rc};

/// The rule an invalid identifier broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    /// The name is empty.
    Empty,
    /// The name starts with a character that cannot begin an identifier, such as a digit.
    StartsWithInvalidCharacter(char),
    /// The name contains a character that cannot appear in an identifier.
    InvalidCharacter(char),
    /// The name is a reserved keyword.
    Keyword,
    /// The name appears more than once in the same field list.
    Duplicate,
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("is empty"),
            Self::StartsWithInvalidCharacter(c) => write!(f, "starts with {c:?}"),
            Self::InvalidCharacter(c) => write!(f, "contains {c:?}"),
            Self::Keyword => f.write_str("is a reserved keyword"),
            Self::Duplicate => f.write_str("is declared more than once"),
        }
    }
}

/// An error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field name in a field specification is not a valid identifier.
    InvalidFieldName {
        /// The offending name.
        name: Rc<str>,
        /// Which rule the name broke.
        reason: InvalidName,
    },
    /// A declared field did not receive a value during construction.
    MissingArgument {
        /// The name of the field left unbound.
        name: Rc<str>,
    },
    /// A field received more than one value during construction.
    DuplicateArgument {
        /// The name of the field bound twice.
        name: Rc<str>,
    },
    /// A keyword argument does not name any declared field.
    UnexpectedArgument {
        /// The keyword that was passed.
        name: Rc<str>,
    },
    /// More positional arguments were passed than there are fields.
    TooManyArguments {
        /// The name of the record type being constructed.
        type_name: Rc<str>,
        /// The number of fields.
        expected: usize,
        /// The number of positional arguments obtained.
        got: usize,
    },
    /// An attribute that is not one of the record's fields was accessed.
    NoSuchField {
        /// The name of the record type.
        type_name: Rc<str>,
        /// The name that was looked up.
        name: Rc<str>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldName { name, reason } => {
                write!(f, "all field names must be identifiers: '{name}' {reason}")
            }
            Self::MissingArgument { name } => write!(f, "missing a required argument: '{name}'"),
            Self::DuplicateArgument { name } => write!(f, "multiple values for argument '{name}'"),
            Self::UnexpectedArgument { name } => {
                write!(f, "got an unexpected keyword argument '{name}'")
            }
            Self::TooManyArguments { type_name, expected, got } => {
                write!(
                    f,
                    "{type_name} takes {expected} positional arguments but {got} were given"
                )
            }
            Self::NoSuchField { type_name, name } => {
                write!(f, "'{type_name}' record has no field '{name}'")
            }
        }
    }
}

impl std::error::Error for Error {}
