// src/usuarios/auth_middleware.rs

use actix_web::{dev::Payload, error::ErrorUnauthorized, web, FromRequest, HttpRequest};

use futures::future::{ready, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

// Importa as Claims do módulo de structs de usuário
use super::usuario_structs::Claims;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Administrador autenticado, extraído do JWT das requisições às rotas
/// administrativas do cardápio.
#[derive(Debug, Clone)]
pub struct AdminAutenticado {
    pub usuario: String,
}

/// Extrator de autenticação para Actix Web: valida o token JWT presente no
/// cabeçalho Authorization (formato `Bearer <token>`).
impl FromRequest for AdminAutenticado {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Acessa o AppState para obter a chave secreta JWT
        let jwt_secret = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.jwt_secret.clone(),
            None => {
                eprintln!("Erro: AppState não disponível no extrator de autenticação.");
                return ready(Err(ErrorUnauthorized("Erro de configuração do servidor.")));
            }
        };

        // Tenta obter o token do cabeçalho "Authorization"
        let token = match req.headers().get("Authorization") {
            Some(header_value) => {
                let header_str = match header_value.to_str() {
                    Ok(s) => s,
                    Err(_) => {
                        return ready(Err(ErrorUnauthorized("Token de autenticação inválido.")))
                    }
                };

                if let Some(token) = header_str.strip_prefix("Bearer ") {
                    token.to_string()
                } else {
                    return ready(Err(ErrorUnauthorized(
                        "Formato de token inválido. Esperado 'Bearer <token>'.",
                    )));
                }
            }
            None => {
                return ready(Err(ErrorUnauthorized("Token de autenticação ausente.")));
            }
        };

        // Decodifica e valida o token (a expiração é validada por padrão)
        let validation = Validation::new(Algorithm::HS256);

        let token_data = match decode::<Claims>(
            &token,
            &DecodingKey::from_secret(jwt_secret.as_ref()),
            &validation,
        ) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Erro ao decodificar/validar JWT: {:?}", e);
                let error_message = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => "Token expirado.",
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        "Assinatura do token inválida."
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => "Token malformado.",
                    _ => "Token de autenticação inválido.",
                };
                return ready(Err(ErrorUnauthorized(error_message)));
            }
        };

        ready(Ok(AdminAutenticado {
            usuario: token_data.claims.sub,
        }))
    }
}
