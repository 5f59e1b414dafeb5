use serde_json::json;

use mockwith::{mockable, MockWithExpectations, RawBatch};

#[mockable]
pub trait Pipeline {
    fn run(&self, input: &str) -> String {
        let parsed = self.parse(input.to_owned());
        self.render(parsed)
    }

    fn parse(&self, input: String) -> Vec<u32>;
    fn render(&self, values: Vec<u32>) -> String;
}

#[test]
fn ordered_fixture() {
    let batch = RawBatch::from_json_str(
        r#"[
            ["parse", ["1,2"], [1, 2]],
            {"method": "render", "params": [[1, 2]], "result": "1 + 2"}
        ]"#,
    )
    .unwrap();

    let pipeline: MockPipeline = MockWithExpectations::default()
        .create_mock_with_expectations(batch, None)
        .unwrap();

    assert_eq!(pipeline.run("1,2"), "1 + 2");
}

#[test]
fn named_fixture() {
    let batch = RawBatch::from_json(&json!({
        "parse": {"result": [3], "invoked": "atLeastOnce"},
        "render": [[[3]], "3"]
    }))
    .unwrap();

    let pipeline: MockPipeline = MockWithExpectations::default()
        .create_mock_with_expectations(batch, None)
        .unwrap();

    assert_eq!(pipeline.run("anything"), "3");
    assert_eq!(pipeline.run("else"), "3");
}
