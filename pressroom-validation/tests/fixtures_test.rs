//! Fixture-driven end-to-end runs of the publish validator.

use std::sync::Arc;

use pressroom_core::config::ValidationSettings;
use pressroom_core::models::{NewsItem, PublishErrors};
use pressroom_core::traits::IPublishValidator;
use pressroom_validation::{messages, PublishValidator};
use test_fixtures::{
    load_fixture, InMemoryRoleStore, InMemoryUserStore, InMemoryVocabularyStore,
};

fn fixture_validator() -> PublishValidator {
    PublishValidator::new(
        ValidationSettings::default(),
        Arc::new(InMemoryVocabularyStore::from_fixture(
            "vocabularies/products.json",
        )),
        Arc::new(InMemoryUserStore::from_fixture("users/newsroom_users.json")),
        Arc::new(InMemoryRoleStore::from_fixture("users/newsroom_roles.json")),
    )
}

fn run_fixture(relative_path: &str) -> PublishErrors {
    let item: NewsItem = load_fixture(relative_path);
    let mut response = PublishErrors::new();
    fixture_validator().validate(&item, &mut response).unwrap();
    response
}

#[test]
fn wire_story_passes_clean() {
    let response = run_fixture("items/wire_story.json");
    assert!(
        response.is_empty(),
        "unexpected errors: {:?}",
        response.messages()
    );
}

#[test]
fn bare_story_fails_every_enabled_rule() {
    let response = run_fixture("items/bare_story.json");
    assert_eq!(
        response.messages(),
        [
            messages::HEADLINE_REQUIRED,
            messages::SHORTTITLE_REQUIRED,
            messages::SUBTITLE_REQUIRED,
            messages::SUBJECT_REQUIRED,
            messages::FEATURED_REQUIRED,
            messages::GALLERY_REQUIRED,
        ]
    );
}

#[test]
fn auto_publish_story_ships_with_no_errors() {
    let item: NewsItem = load_fixture("items/auto_publish_story.json");
    let mut response = PublishErrors::new();
    response.push("Earlier pipeline error");

    fixture_validator().validate(&item, &mut response).unwrap();
    assert!(response.is_empty());
}

#[test]
fn afp_gallery_story_is_rejected_for_supplier_only() {
    let response = run_fixture("items/afp_gallery_story.json");
    assert_eq!(response.messages(), [messages::AFP_IMAGE_USAGE]);
}
