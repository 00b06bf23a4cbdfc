use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, StoreError};
use crate::password::hash_password;
use crate::users::dto::{CreateUserRequest, DeletedUserResponse, UpdateUserRequest};
use crate::users::repo::UserRepo;
use crate::users::repo_types::{NewUser, PublicUser, UserPatch, UserRecord};

const ENTITY: &str = "User";
const EMAIL_TAKEN: &str = "Email already exists";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateUserRequest) -> Result<PublicUser, AppError> {
        if self.find_by_email(&input.email).await?.is_some() {
            warn!(email = %input.email, "email already registered");
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let password_hash = hash_password(&input.password)?;
        let user = self
            .repo
            .insert(NewUser {
                email: input.email,
                password_hash,
                name: input.name.filter(|n| !n.is_empty()),
                role: input.role.unwrap_or_default(),
            })
            .await
            .map_err(conflict_on_email)?;

        info!(user_id = %user.id, email = %user.email, "user created");
        Ok(user.into())
    }

    pub async fn find_all(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    pub async fn find_one(&self, id: &str) -> Result<PublicUser, AppError> {
        let uuid = parse_id(id)?;
        self.repo
            .find_by_id(uuid)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: &str, input: UpdateUserRequest) -> Result<PublicUser, AppError> {
        let uuid = parse_id(id)?;
        let password_hash = input.password.as_deref().map(hash_password).transpose()?;

        let user = self
            .repo
            .update(
                uuid,
                UserPatch {
                    email: input.email,
                    password_hash,
                    name: input.name.filter(|n| !n.is_empty()),
                    role: input.role,
                },
            )
            .await
            .map_err(conflict_on_email)?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;

        info!(user_id = %user.id, "user updated");
        Ok(user.into())
    }

    /// Deletes the user and hands back the full stored record, hash included.
    pub async fn remove(&self, id: &str) -> Result<DeletedUserResponse, AppError> {
        let uuid = parse_id(id)?;
        let user = self
            .repo
            .delete(uuid)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;
        info!(user_id = %user.id, "user deleted");
        Ok(DeletedUserResponse {
            message: format!("User with ID {id} has been successfully deleted"),
            deleted_user: user,
        })
    }

    /// Full record lookup by exact email, for credential checks.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.repo.find_by_email(email).await?)
    }
}

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::not_found(ENTITY, id))
}

// `email` is the only unique column on the table.
fn conflict_on_email(e: StoreError) -> AppError {
    match e {
        StoreError::UniqueViolation(_) => AppError::Conflict(EMAIL_TAKEN.into()),
        other => AppError::Store(other),
    }
}
