//! Binding constructor arguments to record fields.

use std::{iter, rc::Rc};

use tracing::trace;

use crate::{Arguments, Error, FieldNames, Value};

/// How a record constructor matches its arguments to fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Binding {
    /// Every field must receive exactly one value, either by position or by name, and every
    /// argument must correspond to a field.
    #[default]
    Strict,
    /// Positional arguments fill fields in order and keyword arguments overwrite them. Extra
    /// arguments are ignored and unbound fields are set to `nil`. Binding never fails.
    Lenient,
}

impl Binding {
    /// Binds the arguments to the fields, returning one value per field in declaration order.
    pub(crate) fn bind(
        self,
        type_name: &Rc<str>,
        fields: &FieldNames,
        arguments: Arguments,
    ) -> Result<Vec<Value>, Error> {
        trace!(
            %type_name,
            binding = ?self,
            positional = arguments.positional_values().len(),
            keyword = arguments.keyword_values().len(),
            "binding arguments"
        );
        match self {
            Binding::Strict => bind_strict(type_name, fields, arguments),
            Binding::Lenient => Ok(bind_lenient(fields, arguments)),
        }
    }
}

fn bind_strict(
    type_name: &Rc<str>,
    fields: &FieldNames,
    arguments: Arguments,
) -> Result<Vec<Value>, Error> {
    let (mut values, mut keyword) = arguments.into_parts();

    // Fields are bound positionally one at a time, so a keyword colliding with one of them is
    // reported before any surplus of positional arguments.
    let (bound, unbound) = fields.as_slice().split_at(values.len().min(fields.len()));
    if let Some(name) = bound.iter().find(|&name| keyword.iter().any(|(other, _)| other == name))
    {
        return Err(Error::DuplicateArgument { name: Rc::clone(name) });
    }

    if values.len() > fields.len() {
        return Err(Error::TooManyArguments {
            type_name: Rc::clone(type_name),
            expected: fields.len(),
            got: values.len(),
        });
    }

    for (i, (name, _)) in keyword.iter().enumerate() {
        if keyword[..i].iter().any(|(other, _)| other == name) {
            return Err(Error::DuplicateArgument { name: Rc::clone(name) });
        }
    }

    values.reserve(unbound.len());
    for name in unbound {
        let index = keyword
            .iter()
            .position(|(other, _)| other == name)
            .ok_or_else(|| Error::MissingArgument { name: Rc::clone(name) })?;
        let (_, value) = keyword.remove(index);
        values.push(value);
    }

    // Every keyword naming a field has been consumed by now.
    if let Some((name, _)) = keyword.into_iter().next() {
        return Err(Error::UnexpectedArgument { name });
    }

    Ok(values)
}

fn bind_lenient(fields: &FieldNames, arguments: Arguments) -> Vec<Value> {
    let (positional, keyword) = arguments.into_parts();
    let mut values: Vec<_> =
        positional.into_iter().chain(iter::repeat(Value::Nil)).take(fields.len()).collect();
    for (name, value) in keyword {
        match fields.position(&name) {
            Some(position) => values[position] = value,
            None => trace!(%name, "ignoring unknown keyword argument"),
        }
    }
    values
}
