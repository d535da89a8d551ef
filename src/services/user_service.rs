use crate::{
    database::{SqliteStore, UserField},
    models::User,
};

/// Outcome of a create attempt, decided by the duplicate-email pre-check.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    DuplicateEmail,
}

/// Looks up users by the supplied exact-match filters. Filters combine with
/// AND; callers are expected to pass at least one.
pub async fn lookup_users(
    store: &SqliteStore,
    email: Option<&str>,
    name: Option<&str>,
) -> Result<Vec<User>, String> {
    let mut filters = Vec::new();
    if let Some(email) = email {
        filters.push((UserField::Email, email.to_string()));
    }
    if let Some(name) = name {
        filters.push((UserField::Name, name.to_string()));
    }

    let rows = store
        .query_users(&filters)
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Creates a user unless a row with the same email already exists.
///
/// The existence check and the insert are two separate storage calls with no
/// lock between them, so two concurrent creates for the same email can both
/// pass the check and both insert. The store carries no UNIQUE constraint.
pub async fn create_user(store: &SqliteStore, user: User) -> Result<CreateOutcome, String> {
    let existing = store
        .query_users(&[(UserField::Email, user.email.clone())])
        .map_err(|e| format!("Database error: {}", e))?;

    if !existing.is_empty() {
        return Ok(CreateOutcome::DuplicateEmail);
    }

    store
        .insert_user(&user.name, &user.email, user.profile_picture.as_deref())
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(CreateOutcome::Created)
}
