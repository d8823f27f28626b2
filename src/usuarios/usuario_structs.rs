// src/usuarios/usuario_structs.rs

use serde::{Deserialize, Serialize};

/// Estrutura para receber as credenciais do administrador no login.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String, // Senha em texto claro (verificada contra o hash configurado)
}

/// Estrutura para o payload do JWT (Claims).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (nome do usuário administrador)
    pub exp: i64,    // Expiration Time (timestamp Unix)
}

/// Estrutura para a resposta de sucesso do login, com o token JWT.
#[derive(Serialize)]
pub struct AuthResponse {
    pub status: String,
    pub message: String,
    pub token: String,
}
