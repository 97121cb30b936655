//! DTOs for authors_sea adapter.

/// DTO for inserting a new author row.
#[derive(Debug, Clone)]
pub struct AuthorCreate {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
}

impl AuthorCreate {
    pub fn new(
        username: impl Into<String>,
        hashed_password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            hashed_password: hashed_password.into(),
            email: email.into(),
        }
    }
}

/// DTO for rewriting the mutable columns of an existing author.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
    pub updated_at: time::OffsetDateTime,
}
