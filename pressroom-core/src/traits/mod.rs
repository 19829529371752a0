pub mod stores;
pub mod validator;

pub use stores::{IRoleStore, IUserStore, IVocabularyStore};
pub use validator::IPublishValidator;
