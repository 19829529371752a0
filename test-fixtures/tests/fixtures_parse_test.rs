//! Every shipped fixture must deserialize into its workspace type.

use pressroom_core::models::{NewsItem, Role, User, Vocabulary};
use test_fixtures::{fixture_exists, load_fixture};

#[test]
fn vocabulary_fixture_parses() {
    let vocabularies: Vec<Vocabulary> = load_fixture("vocabularies/products.json");
    let products = vocabularies.iter().find(|v| v.id == "products").unwrap();
    assert!(products
        .items
        .iter()
        .any(|entry| entry.qcode == "fast-news" && entry.mask().is_some()));
    // The legacy entry's short code must decode to nothing.
    let legacy = products
        .items
        .iter()
        .find(|entry| entry.qcode == "legacy-wire")
        .unwrap();
    assert!(legacy.mask().is_none());
}

#[test]
fn newsroom_fixtures_parse() {
    let users: Vec<User> = load_fixture("users/newsroom_users.json");
    let roles: Vec<Role> = load_fixture("users/newsroom_roles.json");
    assert!(users.iter().any(|u| u.username == "mrossi"));
    assert!(roles.iter().any(|r| r.name == "Journalist"));
}

#[test]
fn item_fixtures_parse() {
    for path in [
        "items/wire_story.json",
        "items/bare_story.json",
        "items/auto_publish_story.json",
        "items/afp_gallery_story.json",
    ] {
        assert!(fixture_exists(path), "missing fixture {path}");
        let _item: NewsItem = load_fixture(path);
    }
}
