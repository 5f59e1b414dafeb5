use mockwith::{mockable, named, ordered, ClassKind, MockWithExpectations, Mockable, RawBatch};

#[mockable]
pub trait TestInterface {
    fn method1(&self) -> String;
    fn method2(&self) -> String;
    fn method3(&self, value: u32) -> u32;
    fn method4(&self);
}

#[mockable]
pub trait TestAbstractClass {
    fn method1(&self) -> String;

    fn method2(&self) -> String {
        format!("{}!", self.method1())
    }

    #[mockwith(protected)]
    fn method3(&self, value: u32) -> u32;

    #[mockwith(protected)]
    fn method4(&self) -> u32 {
        4
    }
}

fn create<M: Mockable>(batch: RawBatch) -> M {
    MockWithExpectations::default()
        .create_mock_with_expectations(batch, None)
        .unwrap()
}

#[test]
fn class_kinds() {
    assert_eq!(MockTestInterface::class_info().kind(), ClassKind::Interface);
    assert_eq!(
        MockTestAbstractClass::class_info().kind(),
        ClassKind::Abstract
    );
}

#[test]
fn interface_named() {
    let mock: MockTestInterface = create(named! { "method1" => [result = "hello"] });

    assert_eq!(mock.method1(), "hello");
    assert_eq!(
        mock.object().stubbed_methods(),
        ["method1", "method2", "method3", "method4"]
    );
}

#[test]
fn interface_ordered() {
    let mock: MockTestInterface = create(ordered![["method1", result = "hello"]]);

    assert_eq!(mock.method1(), "hello");
}

#[test]
fn abstract_class_named() {
    let mock: MockTestAbstractClass = create(named! { "method1" => [result = "hello"] });

    assert_eq!(mock.method1(), "hello");
    assert_eq!(mock.method2(), "hello!");
    assert_eq!(mock.method4(), 4);
    assert_eq!(
        mock.object().stubbed_methods(),
        ["method1", "method3"]
    );
}

#[test]
fn abstract_class_ordered() {
    let mock: MockTestAbstractClass = create(ordered![["method1", result = "hello"]]);

    assert_eq!(mock.method1(), "hello");
}

#[test]
#[should_panic(expected = "No suitable expectation found for TestInterface::method3(7) (call #1)")]
fn uncovered_interface_method_is_never_expected() {
    let mock: MockTestInterface = create(named! { "method1" => [result = "hello"] });

    mock.method1();
    mock.method3(7);
}

#[test]
#[should_panic(expected = "No suitable expectation found for TestAbstractClass::method3(7) (call #0)")]
fn uncovered_abstract_method_is_never_expected() {
    let mock: MockTestAbstractClass = create(named! { "method1" => "any" });

    mock.method3(7);
}

#[test]
fn covered_methods_keep_their_expectations() {
    let mock: MockTestInterface = create(named! {
        "method1" => [result = "hello"],
        "method3" => [[1], 2, invoked = "once"],
        "method4" => "atLeastOnce",
    });

    assert_eq!(mock.method3(1), 2);
    mock.method4();
    mock.method4();
}
