use presence::{Optional, PresenceError};

#[test]
fn of_wraps_any_value() {
    for v in [0, 1, -7, i32::MAX] {
        let optional = Optional::of(Some(v)).expect("value given");
        assert!(optional.is_present());
        assert_eq!(optional.get(), Ok(&v));
    }
}

#[test]
fn of_without_value_is_invariant_violation() {
    let err = Optional::<String>::of(None).unwrap_err();
    assert!(matches!(err, PresenceError::InvariantViolation(_)));
}

#[test]
fn of_nullable_follows_its_input() {
    assert!(Optional::of_nullable(Some("SAT3455")).is_present());
    assert!(!Optional::<&str>::of_nullable(None).is_present());
    assert_eq!(Optional::of_nullable(Some(3)), Optional::present(3));
}

#[test]
fn empty_is_absent_and_get_fails() {
    let empty: Optional<u32> = Optional::empty();
    assert!(!empty.is_present());
    assert!(empty.is_absent());
    assert_eq!(empty.get(), Err(PresenceError::EmptyValueAccess));
    assert_eq!(empty.into_value(), Err(PresenceError::EmptyValueAccess));
}

#[test]
fn unguarded_get_can_be_recovered_locally() {
    let empty: Optional<u32> = Optional::empty();
    let id = match empty.get() {
        Ok(id) => *id,
        Err(PresenceError::EmptyValueAccess) => 0,
        Err(other) => panic!("unexpected error: {other}"),
    };
    assert_eq!(id, 0);
}

#[test]
fn present_owns_its_value() {
    let optional = Optional::present(String::from("FL360"));
    assert_eq!(optional.as_ref().map(String::len), Optional::present(5));
    assert_eq!(optional.into_value().unwrap(), "FL360");
}
