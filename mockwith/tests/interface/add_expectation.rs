use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::{json, Value};

use mockwith::{
    entry, invocation::at, mockable, Callback, ClassInfo, ClassKind, Error, Fault, MethodInfo,
    MockObject, MockWithExpectations, RawEntry, RawItem, Thrown, Visibility,
};

fn my_class() -> ClassInfo {
    ClassInfo::new("MyClass", ClassKind::Concrete)
        .method(MethodInfo::new("fun", Visibility::Public, false))
        .method(MethodInfo::new("a", Visibility::Protected, false))
        .method(MethodInfo::new("b", Visibility::Protected, false))
}

fn create_mock() -> MockObject {
    MockObject::builder(&my_class())
        .disable_original_constructor()
        .build()
        .unwrap()
}

fn check(entry: RawEntry, params: Value, result: Value, count: usize) {
    let mock = create_mock();
    let params = match params {
        Value::Array(params) => params,
        x => panic!("params must be an array: {x}"),
    };

    MockWithExpectations::default()
        .add_expectation(&mock, entry)
        .unwrap();

    let mut actual = json!("function never called");
    for _ in 0..count {
        actual = mock.call("fun", params.clone());
    }

    if count > 0 {
        assert_eq!(actual, result);
    }
}

#[test]
fn method_only() {
    check(entry!["fun"], json!([]), Value::Null, 1);
    check(entry![method = "fun"], json!([]), Value::Null, 1);
}

#[test]
fn result_without_params() {
    check(entry!["fun", result = "foo"], json!([]), json!("foo"), 1);
    check(
        entry!["fun", result = ["foo", "bar"]],
        json!([]),
        json!(["foo", "bar"]),
        1,
    );
}

#[test]
fn params_and_result() {
    check(entry!["fun", ["foo"], result = "bar"], json!(["foo"]), json!("bar"), 1);
    check(entry!["fun", ["foo"], "bar"], json!(["foo"]), json!("bar"), 1);
    check(
        entry!["fun", params = ["foo"], result = "bar"],
        json!(["foo"]),
        json!("bar"),
        1,
    );
    check(
        entry!["fun", params = ["foo", 2], result = "bar"],
        json!(["foo", 2]),
        json!("bar"),
        1,
    );
    check(entry!["fun", ["foo", 2], "bar"], json!(["foo", 2]), json!("bar"), 1);
    check(
        entry!["fun", params = ["foo", 2, 3], result = "bar"],
        json!(["foo", 2, 3]),
        json!("bar"),
        1,
    );
}

#[test]
fn call_counts() {
    check(entry!["fun", invoked = 0], json!([]), Value::Null, 0);
    check(entry!["fun", invoked = 1], json!([]), Value::Null, 1);
    check(entry!["fun", invoked = 2], json!([]), Value::Null, 2);
    check(entry!["fun", invoked = "once"], json!([]), Value::Null, 1);
    check(entry!["fun", invoked = "any"], json!([]), Value::Null, 17);
    check(entry!["fun", invoked = "never"], json!([]), Value::Null, 0);
    check(entry!["fun", invoked = "atLeastOnce"], json!([]), Value::Null, 1);
    check(entry!["fun", invoked = "atLeastOnce"], json!([]), Value::Null, 2);
    check(entry!["fun", invoked = "atLeast 2"], json!([]), Value::Null, 2);
    check(entry!["fun", invoked = "atLeast 2"], json!([]), Value::Null, 3);
    check(entry!["fun", invoked = "exactly 7"], json!([]), Value::Null, 7);
    check(entry!["fun", invoked = "atMost 2"], json!([]), Value::Null, 1);
    check(entry!["fun", invoked = "atMost 2"], json!([]), Value::Null, 2);
}

#[test]
fn result_callback() {
    let callback = Callback::new(|args| {
        if args.first() == Some(&json!("foo")) {
            json!("bar")
        } else {
            json!("wat?")
        }
    });

    check(entry!["fun", result = callback], json!(["foo"]), json!("bar"), 1);
}

#[test]
fn results_of_every_kind() {
    for result in [
        Value::Null,
        json!(false),
        json!(0),
        json!([]),
        json!(true),
        json!(1),
        json!("hello"),
    ] {
        check(
            entry!["fun", [], (result.clone()), invoked = 1],
            json!([]),
            result,
            1,
        );
    }
}

#[test]
fn throws_message() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectation(&mock, entry!["fun", throws = "boom!"])
        .unwrap();

    match mock.invoke("fun", vec![]) {
        Err(Fault::Thrown(thrown)) => assert_eq!(thrown.to_string(), "boom!"),
        x => panic!("unexpected result: {x:?}"),
    }
}

#[derive(Debug)]
struct Boom(u32);

impl Display for Boom {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "boom #{}", self.0)
    }
}

impl std::error::Error for Boom {}

#[test]
fn throws_error() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectation(&mock, entry!["fun", throws = Thrown::new(Boom(3))])
        .unwrap();

    let Err(Fault::Thrown(thrown)) = mock.invoke("fun", vec![]) else {
        panic!("expected an error");
    };
    assert_eq!(thrown.downcast_ref::<Boom>().map(|b| b.0), Some(3));
}

#[test]
#[should_panic(expected = "MyClass::fun threw: boom!")]
fn throws_panics_on_call() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectation(&mock, entry!["fun", throws = "boom!"])
        .unwrap();

    mock.call("fun", vec![]);
}

#[test]
fn params_are_cast_to_list() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectation(&mock, entry!["fun", "not an array", 42])
        .unwrap();

    assert_eq!(mock.call("fun", vec![json!("not an array")]), json!(42));
}

#[test]
fn cannot_have_both_result_and_throws() {
    let mock = create_mock();
    let err = MockWithExpectations::default()
        .add_expectation(&mock, entry!["fun", result = true, throws = "x"])
        .unwrap_err();

    assert!(matches!(err, Error::ConflictingExpectation { .. }));
    assert!(err
        .to_string()
        .contains("cannot expect both 'result' and 'throws'"));
}

#[test]
fn add_expectations_in_sequence() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectations(
            &mock,
            [
                entry!["fun", ["foo", 2], "bar", invoked = at(0)],
                entry!["fun", ["foo"], "baz", invoked = at(1)],
                entry!["fun", ["bloop"], throws = "bloop", invoked = at(2)],
            ],
        )
        .unwrap();

    assert_eq!(mock.call("fun", vec![json!("foo"), json!(2)]), json!("bar"));
    assert_eq!(mock.call("fun", vec![json!("foo")]), json!("baz"));
    assert!(matches!(
        mock.invoke("fun", vec![json!("bloop")]),
        Err(Fault::Thrown(thrown)) if thrown.to_string() == "bloop"
    ));
}

#[test]
fn prepared_expectations_are_applied_as_is() {
    let mock = create_mock();
    MockWithExpectations::default()
        .add_expectations(
            &mock,
            [
                RawItem::from(mockwith::Expectation::never("a")),
                RawItem::from(entry!["b", result = "b"]),
            ],
        )
        .unwrap();

    assert_eq!(mock.call("b", vec![]), json!("b"));
}

#[mockable]
pub trait Fun {
    fn fun(&self, name: String, count: i64) -> String;
}

#[test]
fn typed_mock() {
    let mocks = MockWithExpectations::default();
    let fun: MockFun = mocks
        .create_mock_with_expectations(mockwith::ordered![], None)
        .unwrap();

    mocks
        .add_expectation(&fun, entry!["fun", ["foo", 2], "bar", invoked = "once"])
        .unwrap();
    mocks
        .add_expectation(&fun, entry!["fun", ["foo"], "baz"])
        .unwrap();

    assert_eq!(fun.fun("foo".into(), 2), "bar");
    assert_eq!(fun.fun("foo".into(), 3), "baz");
    assert_eq!(fun.fun("foo".into(), 2), "baz");
}
