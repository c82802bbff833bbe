use apollo_api::types::{EmailMatch, Organization, Person};
use serde_json::Value;

fn load_fixture(name: &str) -> Value {
    let raw = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn deserialize_organizations() {
    let json = load_fixture("organizations.json");
    let orgs: Vec<Organization> = serde_json::from_value(json["organizations"].clone()).unwrap();
    assert_eq!(orgs.len(), 3);
    assert_eq!(orgs[0].name, "Acme Corp");
    assert_eq!(orgs[1].id, "5e66b6381e05b4008c8331b8");
    assert_eq!(orgs[1].other["primary_domain"], "acme.com");
    assert!(orgs[2].other["website_url"].is_null());
}

#[test]
fn deserialize_people() {
    let json = load_fixture("people.json");
    let people: Vec<Person> = serde_json::from_value(json["people"].clone()).unwrap();
    assert_eq!(people.len(), 2);

    let dana = &people[0];
    assert_eq!(dana.id.as_deref(), Some("57dfa65ca6da980b2ffa8946"));
    assert_eq!(dana.title.as_deref(), Some("Technical Recruiter"));
    assert_eq!(dana.seniority.as_deref(), Some("senior"));
    assert_eq!(dana.other["organization_id"], "5e66b6381e05b4008c8331b8");
}

#[test]
fn deserialize_person_without_title() {
    let person: Person = serde_json::from_value(serde_json::json!({
        "id": "abc",
        "first_name": "Kim"
    }))
    .unwrap();
    assert!(person.title.is_none());
    assert!(person.seniority.is_none());
}

#[test]
fn deserialize_matches() {
    let json = load_fixture("bulk_match.json");
    let matches: Vec<EmailMatch> = serde_json::from_value(json["matches"].clone()).unwrap();
    assert_eq!(matches.len(), 4);
    let with_email = matches.iter().filter(|m| m.email.is_some()).count();
    assert_eq!(with_email, 2);
    assert_eq!(matches[1].other["email_status"], "unavailable");
}

#[test]
fn deserialize_organization_missing_name_returns_error() {
    let result = serde_json::from_value::<Organization>(serde_json::json!({ "id": "1" }));
    assert!(result.is_err());
}
