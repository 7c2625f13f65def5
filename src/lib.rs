//! Lightweight record types with named fields, created at runtime.
//!
//! A record type is built from a name and a list of field names by [`record_factory`]. Its
//! instances hold exactly one [`Value`] per declared field and cannot gain new ones. They can be
//! constructed from positional and keyword [`Arguments`], iterated over in declaration order, and
//! displayed as `TypeName(field=value, ...)`.
//!
//! ```
//! use recordtype::{args, record_factory, Value};
//!
//! let dog = record_factory("Dog", "name weight owner")?;
//! let mut rex = dog.construct(args!["Rex", 30, "Bob"])?;
//! assert_eq!(rex.to_string(), "Dog(name='Rex', weight=30, owner='Bob')");
//!
//! let values: Vec<_> = rex.iter().cloned().collect();
//! assert_eq!(values, [Value::from("Rex"), Value::from(30), Value::from("Bob")]);
//!
//! rex.set("weight", 32)?;
//! assert_eq!(rex.get("weight")?, &Value::from(32));
//! assert!(rex.set("master", "Bob").is_err());
//! # Ok::<(), recordtype::Error>(())
//! ```

mod arguments;
mod binding;
mod error;
mod fields;
pub mod lexer;
mod record;
mod value;

pub use arguments::*;
pub use binding::*;
pub use error::*;
pub use fields::*;
pub use record::*;
pub use value::*;
