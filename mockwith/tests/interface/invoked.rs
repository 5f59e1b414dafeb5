use mockwith::{
    invocation::{at_least, exactly},
    mockable, named, Failure, MockWithExpectations, Mockable,
};

#[mockable]
pub trait Counter {
    fn next(&self) -> u64;
    fn reset(&self);
}

fn create(batch: mockwith::RawBatch) -> MockCounter {
    MockWithExpectations::default()
        .create_mock_with_expectations(batch, None)
        .unwrap()
}

#[test]
fn exactly_seven() {
    let counter = create(named! {
        "next" => [result = 1, invoked = "exactly 7"],
        "reset" => "any",
    });

    for _ in 0..7 {
        assert_eq!(counter.next(), 1);
    }
}

#[test]
fn any_number_of_times() {
    let counter = create(named! { "next" => [result = 2], "reset" => "any" });

    for _ in 0..17 {
        assert_eq!(counter.next(), 2);
    }
}

#[test]
fn policies_from_values() {
    let counter = create(named! {
        "next" => [result = 3, invoked = at_least(2)],
        "reset" => (exactly(1)),
    });

    counter.next();
    counter.next();
    counter.next();
    counter.reset();
}

#[test]
#[should_panic(
    expected = "Expectation Counter::next(..) [exactly 7] was called 6 time(s), but is expected to be called exactly 7 times"
)]
fn too_few_calls_fail_on_drop() {
    let counter = create(named! {
        "next" => [result = 1, invoked = "exactly 7"],
        "reset" => "any",
    });

    for _ in 0..6 {
        counter.next();
    }
}

#[test]
#[should_panic(expected = "Mocked object 'Counter' has unfulfilled expectations:")]
fn checkpoint_reports_missing_calls() {
    let counter = create(named! { "next" => "once", "reset" => "never" });

    counter.object().checkpoint();
}

#[test]
fn verify_lists_failures() {
    let counter = create(named! { "next" => "once", "reset" => "never" });

    counter.next();
    counter.reset();
    let failures = counter.object().verify().unwrap_err();

    assert_eq!(failures.len(), 1);
    assert!(matches!(&failures[0], Failure::NoMatch { method, .. } if method == "reset"));
    assert!(counter
        .object()
        .report()
        .unwrap()
        .contains("- No suitable expectation found for Counter::reset() (call #1)"));

    counter.object().release();
}

#[test]
fn clones_share_the_mock() {
    let counter = create(named! { "next" => [result = 5, invoked = 2], "reset" => "never" });
    let clone = counter.clone();

    assert_eq!(counter.next(), 5);
    assert_eq!(clone.next(), 5);
    drop(counter);

    assert_eq!(clone.object().invocations().len(), 2);
}

#[test]
#[should_panic(expected = "No suitable expectation found for Counter::next() (call #7)")]
fn exactly_seven_rejects_the_eighth_call() {
    let counter = create(named! {
        "next" => [result = 1, invoked = "exactly 7"],
        "reset" => "any",
    });

    for _ in 0..8 {
        counter.next();
    }
}
