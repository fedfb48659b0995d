use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::User;
use crate::utils::errors::{conflict_error, AppError};

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
}

/// Almacén de usuarios en memoria con email único
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        // el email se guarda en minúsculas, la comparación es directa
        if users.values().any(|existing| existing.email == user.email) {
            return Err(conflict_error("User", "email", &user.email));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let needle = email.trim().to_lowercase();
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == needle).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    fn sample_user(email: &str, role: UserRole) -> User {
        User::new(
            "Ramesh Kumar".to_string(),
            email.to_string(),
            "hash".to_string(),
            role,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryUserStore::new();
        let user = store
            .insert(sample_user("ramesh@example.com", UserRole::Driver))
            .await
            .unwrap();

        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ramesh@example.com");

        let by_email = store
            .find_by_email("RAMESH@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = InMemoryUserStore::new();
        store
            .insert(sample_user("asha@example.com", UserRole::Passenger))
            .await
            .unwrap();

        let err = store
            .insert(sample_user("Asha@Example.COM", UserRole::Driver))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store
            .find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
