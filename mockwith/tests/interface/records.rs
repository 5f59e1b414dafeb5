use serde::{Deserialize, Serialize};
use serde_json::json;

use mockwith::{mockable, named, MockWithExpectations};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Saved {
    Created(u32),
    Updated,
}

#[mockable]
pub trait Users {
    fn find(&self, id: u32) -> Option<User>;
    fn save(&self, user: &User) -> Saved;

    fn rename(&self, id: u32, name: &str) -> Option<Saved> {
        let mut user = self.find(id)?;
        user.name = name.to_owned();

        Some(self.save(&user))
    }
}

#[test]
fn structs_as_arguments_and_results() {
    let users: MockUsers = MockWithExpectations::default()
        .create_mock_with_expectations(
            named! {
                "find" => [[7], (json!({"id": 7, "name": "bob"})), invoked = "once"],
                "save" => [[(json!({"id": 7, "name": "alice"}))], "Updated", invoked = "once"],
            },
            None,
        )
        .unwrap();

    assert_eq!(users.rename(7, "alice"), Some(Saved::Updated));
}

#[test]
fn enum_variants_with_data() {
    let users: MockUsers = MockWithExpectations::default()
        .create_mock_with_expectations(
            named! {
                "find" => "never",
                "save" => [result = (json!({"Created": 3}))],
            },
            None,
        )
        .unwrap();
    let user = User {
        id: 3,
        name: "carol".into(),
    };

    assert_eq!(users.save(&user), Saved::Created(3));
}

#[test]
#[should_panic(expected = "Unable to convert the value {\"id\":\"x\"} returned for Users::find")]
fn malformed_record() {
    let users: MockUsers = MockWithExpectations::default()
        .create_mock_with_expectations(named! { "find" => [result = (json!({"id": "x"}))] }, None)
        .unwrap();

    users.find(1);
}
