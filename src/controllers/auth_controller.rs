use bcrypt::{hash, verify, DEFAULT_COST};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::auth_dto::{ApiResponse, LoginRequest, SignupRequest, UserResponse};
use crate::models::user::User;
use crate::repositories::user_repository::UserStore;
use crate::utils::errors::AppError;

pub struct AuthController {
    users: Arc<dyn UserStore>,
}

impl AuthController {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn signup(
        &self,
        request: SignupRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que el email no exista
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        // Crear usuario y guardarlo
        let user = User::new(request.full_name, request.email, password_hash, request.role);
        let saved = self.users.insert(user).await?;

        info!("👤 Usuario registrado: {} ({:?})", saved.email, saved.role);

        Ok(ApiResponse::success_with_message(
            UserResponse::from(saved),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<UserResponse>, AppError> {
        // Buscar usuario por email
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        Ok(ApiResponse::success(UserResponse::from(user)))
    }
}
