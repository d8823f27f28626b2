// src/usuarios/usuario_router.rs

use actix_web::{post, web, HttpResponse};
use bcrypt::verify; // Para verificar a senha contra o hash
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

// Importa as structs do módulo de usuários
use super::usuario_structs::{AuthResponse, Claims, LoginRequest};
// Importa GenericResponse do módulo shared_structs
use crate::shared::shared_structs::GenericResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

// Validade do token de administrador
const VALIDADE_TOKEN_HORAS: i64 = 8;

/// Rota de login do administrador.
///
/// As credenciais vêm da configuração (usuário e hash bcrypt da senha), não
/// de uma comparação literal embutida no código. Em caso de sucesso, devolve
/// um JWT que as rotas administrativas do cardápio exigem.
#[post("/admin/login")]
pub async fn login_admin(
    data: web::Data<AppState>,
    login_request: web::Json<LoginRequest>,
) -> HttpResponse {
    // 1. Confere o nome de usuário configurado
    if login_request.usuario != data.admin_usuario {
        return HttpResponse::Unauthorized().json(GenericResponse::erro("Credenciais inválidas."));
    }

    // 2. Verifica a senha contra o hash bcrypt
    let senha_confere = match verify(&login_request.senha, &data.admin_senha_hash) {
        Ok(confere) => confere,
        Err(e) => {
            eprintln!("Erro ao verificar senha: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(GenericResponse::erro("Erro interno ao verificar senha."));
        }
    };

    if !senha_confere {
        return HttpResponse::Unauthorized().json(GenericResponse::erro("Credenciais inválidas."));
    }

    // 3. Gera o token JWT com expiração
    let expiracao = Utc::now() + Duration::hours(VALIDADE_TOKEN_HORAS);
    let claims = Claims {
        sub: login_request.usuario.clone(),
        exp: expiracao.timestamp(),
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(data.jwt_secret.as_ref()),
    ) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Erro ao gerar token JWT: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(GenericResponse::erro("Erro interno ao gerar token."));
        }
    };

    // 4. Retorna resposta de sucesso
    HttpResponse::Ok().json(AuthResponse {
        status: "success".to_string(),
        message: "Login bem-sucedido!".to_string(),
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usuarios::auth_middleware::AdminAutenticado;
    use actix_web::{test, App};
    use serde_json::Value;

    fn estado_app() -> web::Data<AppState> {
        web::Data::new(AppState {
            jwt_secret: "segredo_de_teste".to_string(),
            admin_usuario: "admin".to_string(),
            // Custo baixo para o teste não demorar
            admin_senha_hash: bcrypt::hash("123", 4).unwrap(),
            cardapio_caminho: "db.json".to_string(),
            intake_url: String::new(),
            intake_access_key: String::new(),
            http_client: reqwest::Client::new(),
        })
    }

    #[actix_web::test]
    async fn credenciais_erradas_recebem_401() {
        let app = test::init_service(
            App::new().app_data(estado_app()).service(login_admin),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "usuario": "admin", "senha": "errada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "usuario": "outro", "senha": "123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn login_valido_emite_token_aceito_pelo_extrator() {
        let app = test::init_service(
            App::new()
                .app_data(estado_app())
                .service(login_admin)
                .route(
                    "/admin/ping",
                    web::get().to(|_admin: AdminAutenticado| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        // Sem token, a rota protegida recusa
        let req = test::TestRequest::get().uri("/admin/ping").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        // Login válido
        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "usuario": "admin", "senha": "123" }))
            .to_request();
        let corpo: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(corpo["status"], "success");
        let token = corpo["token"].as_str().unwrap().to_string();

        // Com o token emitido, a rota protegida aceita
        let req = test::TestRequest::get()
            .uri("/admin/ping")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
