use std::cell::Cell;

use presence::Optional;

fn counting(counter: &Cell<usize>, value: i32) -> i32 {
    counter.set(counter.get() + 1);
    value
}

#[test]
fn or_else_returns_held_or_default() {
    assert_eq!(Optional::present(1).or_else(-1), 1);
    assert_eq!(Optional::empty().or_else(-1), -1);
}

#[test]
fn or_else_default_is_built_even_when_present() {
    let built = Cell::new(0);
    let value = Optional::present(1).or_else(counting(&built, -1));
    assert_eq!(value, 1);
    assert_eq!(built.get(), 1);
}

#[test]
fn or_else_get_supplier_only_runs_when_absent() {
    let built = Cell::new(0);
    assert_eq!(Optional::present(1).or_else_get(|| counting(&built, -1)), 1);
    assert_eq!(built.get(), 0);
    assert_eq!(Optional::empty().or_else_get(|| counting(&built, -1)), -1);
    assert_eq!(built.get(), 1);
}

#[test]
fn or_keeps_present_instance_untouched() {
    let built = Cell::new(0);
    let original = Optional::present(String::from("SAT3455"));
    let result = original.clone().or(|| {
        built.set(built.get() + 1);
        Optional::present(String::from("DEFAULT"))
    });
    assert_eq!(result, original);
    assert_eq!(built.get(), 0);
}

#[test]
fn or_returns_supplied_optional_when_absent() {
    let result = Optional::<i32>::empty().or(|| Optional::present(-1));
    assert_eq!(result, Optional::present(-1));
    let still_empty = Optional::<i32>::empty().or(Optional::empty);
    assert!(still_empty.is_absent());
}

#[derive(Debug, PartialEq)]
struct Expensive;

#[test]
fn or_else_throw_builds_error_lazily() {
    let built = Cell::new(0);
    let make = || {
        built.set(built.get() + 1);
        Expensive
    };
    assert_eq!(Optional::present(3).or_else_throw(make), Ok(3));
    assert_eq!(built.get(), 0);
    assert_eq!(Optional::<i32>::empty().or_else_throw(make), Err(Expensive));
    assert_eq!(built.get(), 1);
}
