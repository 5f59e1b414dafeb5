use serde_json::{json, Value};

use mockwith::{
    mockable, named, ordered, Error, MockWithExpectations, Mockable, RawBatch, Thrown,
};

fn check_args(args: &[Value]) -> Result<(), Thrown> {
    match args.first() {
        Some(Value::String(path)) if !path.is_empty() => Ok(()),
        _ => Err(Thrown::msg("store needs a path")),
    }
}

#[mockable(name = MockedStore, constructor = check_args)]
pub trait Store {
    fn load(&self, key: String) -> Option<String>;
    fn store(&self, key: String, value: String);
}

fn create(batch: RawBatch, args: Option<Vec<Value>>) -> Result<MockedStore, Error> {
    MockWithExpectations::default().create_mock_with_expectations(batch, args)
}

#[test]
fn invalid_invocation() {
    let err = create(named! { "load" => "sometimes" }, None).unwrap_err();

    assert!(matches!(err, Error::InvalidSpec { ref literal, .. } if literal == "sometimes"));
    assert_eq!(
        err.to_string(),
        "invalid invocation 'sometimes': cannot handle this notation"
    );
}

#[test]
fn negative_and_fractional_counts() {
    let err = create(named! { "load" => (-1) }, None).unwrap_err();
    assert!(matches!(err, Error::InvalidSpec { .. }));

    let err = create(named! { "load" => 1.5 }, None).unwrap_err();
    assert!(matches!(err, Error::InvalidSpec { .. }));
}

#[test]
fn conflicting_expectation() {
    let err = create(
        ordered![["load", ["a"], result = "b", throws = "c"]],
        None,
    )
    .unwrap_err();

    assert!(matches!(err, Error::ConflictingExpectation { ref method } if method == "load"));
}

#[test]
fn malformed_entries() {
    let err = create(ordered![[["a"], "b"]], None).unwrap_err();
    assert!(matches!(err, Error::MalformedEntry(_)));

    let err = create(ordered![["load", ["a"], "b", null, "once", "extra"]], None).unwrap_err();
    assert!(matches!(err, Error::MalformedEntry(_)));
}

#[test]
fn unknown_method() {
    let err = create(named! { "delete" => "never" }, None).unwrap_err();

    assert!(matches!(
        err,
        Error::UnknownMethod { ref class, ref method } if class == "Store" && method == "delete"
    ));
}

#[test]
fn constructor_is_bypassed_without_args() {
    let store = create(named! { "load" => [result = "v"] }, None).unwrap();

    assert_eq!(store.object().constructor_args(), None);
    assert_eq!(store.load("k".into()).as_deref(), Some("v"));
}

#[test]
fn constructor_runs_with_args() {
    let store = create(named! { "load" => "never" }, Some(vec![json!("/tmp/store")])).unwrap();

    assert_eq!(
        store.object().constructor_args(),
        Some(vec![json!("/tmp/store")])
    );
}

#[test]
fn constructor_failure() {
    let err = create(named! { "load" => "never" }, Some(vec![json!("")])).unwrap_err();

    assert!(matches!(err, Error::Construction { ref class, .. } if class == "Store"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
#[should_panic(expected = "Unable to convert the value 42 returned for Store::load")]
fn return_type_mismatch() {
    let store = create(named! { "load" => [result = 42] }, None).unwrap();

    store.load("k".into());
}
