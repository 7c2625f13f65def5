//! Tests around constructing record instances.

use recordtype::{args, record_factory, Arguments, Binding, Error, RecordOptions, RecordType};

use super::RevealResultExt;

#[test]
fn positional_construction() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    assert_eq!(rex.to_string(), "Dog(name='Rex', weight=30, owner='Bob')");
    assert_eq!(rex.type_name(), "Dog");
}

#[test]
fn keyword_construction() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args!["Rex"; owner = "Bob", weight = 30]).reveal();
    assert_eq!(rex.to_string(), "Dog(name='Rex', weight=30, owner='Bob')");
}

#[test]
fn construction_from_collected_values() {
    let point = record_factory("Point", "x y").reveal();
    let p = point.construct([1.5, -2.0].into_iter().collect::<Arguments>()).reveal();
    assert_eq!(p.to_string(), "Point(x=1.5, y=-2)");
}

#[test]
fn missing_argument_is_reported() {
    let dog = record_factory("Dog", ["name", "weight", "owner"]).reveal();
    let error = dog.construct(args!["Rex", 30]).unwrap_err();
    assert_eq!(error, Error::MissingArgument { name: "owner".into() });
    assert_eq!(error.to_string(), "missing a required argument: 'owner'");
}

#[test]
fn duplicate_argument_is_reported() {
    let dog = record_factory("Dog", ["name", "weight", "owner"]).reveal();
    let error = dog.construct(args!["Rex", 30, "Bob"; owner = "Bob"]).unwrap_err();
    assert_eq!(error, Error::DuplicateArgument { name: "owner".into() });
    assert_eq!(error.to_string(), "multiple values for argument 'owner'");
}

#[test]
fn unexpected_argument_is_reported() {
    let dog = record_factory("Dog", ["name", "weight", "owner"]).reveal();
    let error = dog.construct(args!["Rex", 30, "Bob"; master = "Bob"]).unwrap_err();
    assert_eq!(error, Error::UnexpectedArgument { name: "master".into() });
    assert_eq!(error.to_string(), "got an unexpected keyword argument 'master'");
}

#[test]
fn too_many_arguments_are_reported() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let error = dog.construct(args!["Rex", 30, "Bob", "Alice"]).unwrap_err();
    assert_eq!(error.to_string(), "Dog takes 3 positional arguments but 4 were given");
}

#[test]
fn lenient_binding_fills_in_nil() {
    let options = RecordOptions { binding: Binding::Lenient };
    let dog = RecordType::with_options("Dog", "name weight owner", options).reveal();
    let rex = dog.construct(args!["Rex"; master = "Bob"]).reveal();
    assert_eq!(rex.to_string(), "Dog(name='Rex', weight=nil, owner=nil)");
    assert_eq!(dog.options().binding, Binding::Lenient);
}
