//! Tests around iterating over record values.

use recordtype::{args, record_factory, Value};

use super::RevealResultExt;

#[test]
fn iteration_follows_declaration_order() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args![; owner = "Bob", weight = 30, name = "Rex"]).reveal();
    let values: Vec<_> = rex.iter().cloned().collect();
    assert_eq!(values, [Value::from("Rex"), Value::from(30), Value::from("Bob")]);
}

#[test]
fn iteration_can_be_restarted() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    let first: Vec<_> = (&rex).into_iter().collect();
    let second: Vec<_> = rex.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn records_can_be_destructured() {
    let dog = record_factory("Dog", "name weight owner").reveal();
    let rex = dog.construct(args!["Rex", 30, "Bob"]).reveal();
    let sentence = {
        let values: Vec<_> = rex.iter().map(|value| value.to_string()).collect();
        format!("{}'s dog weighs {}kg", values[2], values[1])
    };
    assert_eq!(sentence, "Bob's dog weighs 30kg");

    if let [name, weight, _] = &rex.into_iter().collect::<Vec<_>>()[..] {
        assert_eq!(name.as_str(), Some("Rex"));
        assert_eq!(weight.as_number(), Some(30.0));
    } else {
        panic!("record should have three fields");
    }
}

#[test]
fn fields_pair_names_with_values() {
    let point = record_factory("Point", "x y").reveal();
    let p = point.construct(args![3, 4]).reveal();
    let pairs: Vec<_> = p.fields().map(|(name, value)| format!("{name}:{value}")).collect();
    assert_eq!(pairs, ["x:3", "y:4"]);
}
