use mockwith::{mockable, named, ordered, MockWithExpectations, Mockable, RawBatch};

#[mockable]
pub trait MyClass {
    fn my_function(&self, value: &str, count: usize) -> Option<String> {
        let mut value = Some(value.to_owned());
        for _ in 0..count {
            value = self.a(value);
            value = self.b(value);
        }

        value
    }

    #[mockwith(protected)]
    fn a(&self, a: Option<String>) -> Option<String> {
        Some(format!("a({})", a.unwrap_or_default()))
    }

    #[mockwith(protected)]
    fn b(&self, b: Option<String>) -> Option<String> {
        Some(format!("b({})", b.unwrap_or_default()))
    }

    #[mockwith(protected)]
    fn c(&self, c: Option<String>) -> Option<String> {
        Some(format!("c({})", c.unwrap_or_default()))
    }
}

fn create(batch: RawBatch) -> MockMyClass {
    MockWithExpectations::default()
        .create_mock_with_expectations(batch, None)
        .unwrap()
}

#[test]
fn ordered_positional() {
    let my_class = create(ordered![
        ["a", ["x"], "y"],
        ["b", ["y"], "z"],
        ["c", "never"],
    ]);

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn ordered_without_params() {
    let my_class = create(ordered![["a"], ["b", [], "z"], ["c", "never"]]);

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn ordered_with_named_fields() {
    let my_class = create(ordered![
        ["a", params = ["x"], "y"],
        ["b", ["y"], result = "z"],
        [method = "c", "never"],
    ]);

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn ordered_with_invoked_field() {
    let my_class = create(ordered![
        ["a", params = ["x"], "y"],
        ["b", ["y"], result = "z"],
        ["c", invoked = "never"],
    ]);

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn named_positional() {
    let my_class = create(named! {
        "c" => "never",
        "b" => [["y"], "z"],
        "a" => [["x"], "y"],
    });

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn named_with_named_fields() {
    let my_class = create(named! {
        "c" => [invoked = "never"],
        "b" => [params = ["y"], "z"],
        "a" => [["x"], result = "y"],
    });

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
}

#[test]
fn unstubbed_methods_run_their_implementation() {
    let my_class = create(named! { "b" => [["a(x)"], "z"] });

    assert_eq!(my_class.my_function("x", 1).as_deref(), Some("z"));
    assert_eq!(my_class.c(Some("x".into())).as_deref(), Some("c(x)"));
}

#[test]
fn repeated_calls_follow_the_sequence() {
    let my_class = create(ordered![
        ["a", ["x"], "y"],
        ["b", ["y"], "z"],
        ["a", ["z"], "x"],
        ["b", ["x"], "done"],
    ]);

    assert_eq!(my_class.my_function("x", 2).as_deref(), Some("done"));
    assert_eq!(my_class.object().invocations().len(), 4);
}

#[test]
#[should_panic(expected = "No suitable expectation found for MyClass::a(\"x\") (call #0)")]
fn calls_out_of_order() {
    let my_class = create(ordered![["b", ["y"], "z"], ["a", ["x"], "y"]]);

    my_class.my_function("x", 1);
}

#[test]
#[should_panic(expected = "No suitable expectation found for MyClass::c(\"x\") (call #2)")]
fn never_called_method_is_called() {
    let my_class = create(ordered![["a", ["x"], "y"], ["b", ["y"], "z"], ["c", "never"]]);

    my_class.my_function("x", 1);
    my_class.c(Some("x".into()));
}

#[test]
#[should_panic(expected = "Mocked object 'MyClass' has unfulfilled expectations:")]
fn sequence_not_finished() {
    let my_class = create(ordered![["a", ["x"], "y"], ["b", ["y"], "z"]]);

    my_class.a(Some("x".into()));
}
