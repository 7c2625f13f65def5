//! Tests around reassigning record fields.

use recordtype::{args, record_factory, Error, Value};

use super::RevealResultExt;

#[test]
fn reassigned_fields_show_up_in_iteration_and_display() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let mut rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    rex.set("weight", 32).reveal();
    assert_eq!(rex.to_string(), "Dog(name='Rex', weight=32, owner='Bob')");
    assert_eq!(rex.iter().nth(1), Some(&Value::from(32)));
}

#[test]
fn undeclared_fields_cannot_be_set() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let mut rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    let error = rex.set("master", "Bob").unwrap_err();
    assert_eq!(error, Error::NoSuchField { type_name: "Dog".into(), name: "master".into() });
    assert_eq!(error.to_string(), "'Dog' record has no field 'master'");
    assert!(rex.get("master").is_err());
    assert_eq!(rex.len(), 3);
}

#[test]
fn fields_can_be_mutated_by_position() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let mut rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    if let Some(owner) = rex.get_index_mut(2) {
        *owner = Value::from("Alice");
    }
    assert_eq!(rex.get("owner").reveal(), &Value::from("Alice"));
    assert!(rex.get_index_mut(3).is_none());
    assert_eq!(rex.get_index(0), Some(&Value::from("Rex")));
}

#[test]
fn cloned_records_are_independent() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    let mut twin = rex.clone();
    assert_eq!(rex, twin);
    twin.set("name", "Max").reveal();
    assert_ne!(rex, twin);
    assert_eq!(rex.get("name").reveal(), &Value::from("Rex"));
}
