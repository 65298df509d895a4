// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    models::auth::{Claims, SessionUser},
};

// O único acesso aceito pelo painel
pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/";

#[derive(Clone)]
pub struct AuthService {
    password_hash: String,
    jwt_secret: String,
}

impl AuthService {
    // O hash da senha de demonstração é gerado uma vez, na subida do servidor.
    pub fn new(jwt_secret: String, bcrypt_cost: u32) -> Result<Self, AppError> {
        let password_hash = hash(DEMO_PASSWORD, bcrypt_cost)?;
        Ok(Self { password_hash, jwt_secret })
    }

    pub async fn login_user(&self, email: &str, password: &str, remember: bool) -> Result<String, AppError> {
        // A comparação do e-mail é exata, sem normalizar caixa ou espaços
        if email != DEMO_EMAIL {
            tracing::warn!("🔒 Tentativa de login recusada para {}", email);
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let password_hash_clone = self.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            tracing::warn!("🔒 Senha incorreta para {}", email);
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("🔑 Login realizado: {}", email);
        self.create_token(email, remember)
    }

    pub fn validate_token(&self, token: &str) -> Result<SessionUser, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(SessionUser { email: token_data.claims.sub })
    }

    // "Lembrar de mim" estende a sessão de 1 para 30 dias
    fn create_token(&self, email: &str, remember: bool) -> Result<String, AppError> {
        let now = Utc::now();
        let lifetime = if remember { chrono::Duration::days(30) } else { chrono::Duration::days(1) };
        let expires_at = now + lifetime;

        let claims = Claims {
            sub: email.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
