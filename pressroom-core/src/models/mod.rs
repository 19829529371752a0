pub mod item;
pub mod response;
pub mod rule;
pub mod user;
pub mod vocabulary;

pub use item::{ItemExtra, MediaExtra, MediaRef, NewsItem, Subject};
pub use response::PublishErrors;
pub use rule::{Rule, RuleMask};
pub use user::{Role, User};
pub use vocabulary::{Vocabulary, VocabularyEntry};
