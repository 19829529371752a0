//! Author role rule.
//!
//! An item with an author named in `extra` must be written by a
//! journalist; a journalist co-author substitutes for a non-journalist
//! (or missing) author. The first matching branch wins.

use pressroom_core::config::ValidationSettings;
use pressroom_core::errors::PressroomResult;
use pressroom_core::models::{NewsItem, PublishErrors, User};
use pressroom_core::traits::{IRoleStore, IUserStore};

use crate::messages;
use crate::rules::is_blank;

pub fn validate(
    item: &NewsItem,
    users: &dyn IUserStore,
    roles: &dyn IRoleStore,
    settings: &ValidationSettings,
    response: &mut PublishErrors,
) -> PressroomResult<()> {
    let Some(author_name) = item.extra.author.as_deref().filter(|name| !name.is_empty()) else {
        return Ok(());
    };

    let author = users.find_by_username(author_name)?;
    let coauthor_named = !is_blank(item.extra.coauthor.as_deref());
    let coauthor = match item.extra.coauthor.as_deref() {
        Some(name) if !name.is_empty() => users.find_by_username(name)?,
        _ => None,
    };

    if let Some(user) = &author {
        if is_journalist(user, roles, settings)? {
            return Ok(());
        }
    }
    if let Some(user) = &coauthor {
        if is_journalist(user, roles, settings)? {
            return Ok(());
        }
    }

    if coauthor.is_some() {
        response.push(messages::COAUTHOR_NOT_JOURNALIST);
    } else if author.is_some() && coauthor_named {
        response.push(messages::COAUTHOR_NOT_FOUND);
    } else if author.is_some() {
        response.push(messages::AUTHOR_NOT_JOURNALIST);
    } else if settings.validate_author {
        response.push(messages::AUTHOR_NOT_FOUND);
    } else {
        tracing::warn!(author = %author_name, "author not found, publishing anyway");
    }

    Ok(())
}

/// A user is a journalist when their role record resolves and its name
/// equals the configured journalist role.
fn is_journalist(
    user: &User,
    roles: &dyn IRoleStore,
    settings: &ValidationSettings,
) -> PressroomResult<bool> {
    let Some(role_id) = user.role.as_deref() else {
        return Ok(false);
    };
    let role = roles.find_one(role_id)?;
    Ok(role.is_some_and(|r| r.name == settings.journalist_role))
}
