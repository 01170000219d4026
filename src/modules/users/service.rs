use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::{CreateUserDto, UpdateAccountDto, UpdateUserDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Columns safe to return to clients; the password hash is never selected
/// here.
pub(crate) const USER_COLUMNS: &str =
    "id, name, username, email, role, status, created_at, updated_at";

pub struct UserService;

impl UserService {
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(users)
    }

    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.to_lowercase())
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Re-resolve a user id from a verified token. Used by the auth gate to
    /// catch role or status changes since token issuance.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Create a user. Username and email are lowercase-normalized and the
    /// password is stored only as a bcrypt hash.
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let hashed = hash_password(&dto.password)?;
        let role = dto.role.unwrap_or_default();

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, username, email, password, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.username.to_lowercase())
        .bind(dto.email.to_lowercase())
        .bind(&hashed)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Partial update keyed by username; untouched fields keep their value.
    pub async fn update_by_username(
        db: &PgPool,
        username: &str,
        dto: UpdateUserDto,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 username = COALESCE($3, username),
                 email = COALESCE($4, email),
                 role = COALESCE($5, role),
                 status = COALESCE($6, status),
                 updated_at = now()
             WHERE username = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.to_lowercase())
        .bind(dto.name)
        .bind(dto.username.map(|u| u.to_lowercase()))
        .bind(dto.email.map(|e| e.to_lowercase()))
        .bind(dto.role)
        .bind(dto.status)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    pub async fn delete_by_username(db: &PgPool, username: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username.to_lowercase())
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    /// Self-service profile update (name, username, email only).
    pub async fn update_account(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAccountDto,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 username = COALESCE($3, username),
                 email = COALESCE($4, email),
                 updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.username.map(|u| u.to_lowercase()))
        .bind(dto.email.map(|e| e.to_lowercase()))
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Soft delete: the account is marked INACTIVE, which makes it invisible
    /// to authentication from then on.
    pub async fn deactivate(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET status = 'INACTIVE', updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }
}
