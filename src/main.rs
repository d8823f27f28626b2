// src/main.rs

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::RwLock;


// Importa os módulos
//
// Importa o módulo 'cardapio' que contém as rotas e structs do cardápio.
// O Rust encontrará o arquivo `src/cardapio/mod.rs` e, a partir dele, os submódulos.
mod cardapio;  // Módulo de cardápio (catálogo, filtro e documento JSON)
mod carrinho;  // Módulo de carrinho
mod pedidos;   // Módulo de pedidos
mod usuarios;  // Módulo de usuários (administrador)
mod shared;    // Módulo shared

use cardapio::cardapio_structs::Cardapio;
use carrinho::carrinho_structs::Carrinho;

// Estado compartilhado com a configuração da aplicação e o cliente HTTP de
// saída (reutilizado entre requisições).
pub struct AppState {
    pub jwt_secret: String, // Chave secreta para JWT
    pub admin_usuario: String,
    pub admin_senha_hash: String, // Hash bcrypt da senha do administrador
    pub cardapio_caminho: String, // Caminho do documento JSON do cardápio
    pub intake_url: String,       // Endpoint do serviço de intake de pedidos
    pub intake_access_key: String,
    pub http_client: reqwest::Client,
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Configuração via variáveis de ambiente, com valores de desenvolvimento
    // como padrão.
    let cardapio_caminho = env::var("CARDAPIO_CAMINHO").unwrap_or_else(|_| "db.json".to_string());
    let jwt_secret =
        env::var("JWT_SECRET").unwrap_or_else(|_| "minha_chave_secreta_para_testes_123".into());
    let admin_usuario = env::var("ADMIN_USUARIO").unwrap_or_else(|_| "admin".to_string());

    // Em produção, defina ADMIN_SENHA_HASH com um hash bcrypt gerado
    // previamente; sem ela, vale a senha de desenvolvimento "123".
    let admin_senha_hash = match env::var("ADMIN_SENHA_HASH") {
        Ok(hash) => hash,
        Err(_) => bcrypt::hash("123", bcrypt::DEFAULT_COST)
            .expect("Falha ao gerar hash da senha padrão"),
    };

    let intake_url =
        env::var("INTAKE_URL").unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string());
    let intake_access_key = env::var("INTAKE_ACCESS_KEY").unwrap_or_default();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // Carrega o cardápio uma única vez na inicialização. Um documento ausente
    // ou inválido degrada para um cardápio vazio, sem derrubar o servidor.
    let itens = cardapio::cardapio_storage::carregar_cardapio(&cardapio_caminho);
    println!(
        "Cardápio carregado: {} item(ns) de {}",
        itens.len(),
        cardapio_caminho
    );

    // Cria um estado compartilhado da aplicação.
    // web::Data é usado para compartilhar dados entre as rotas.
    let app_state = web::Data::new(AppState {
        jwt_secret,
        admin_usuario,
        admin_senha_hash,
        cardapio_caminho,
        intake_url,
        intake_access_key,
        http_client: reqwest::Client::new(),
    });

    // Cria e compartilha o cardápio e o carrinho em memória.
    // RwLock permite múltiplos leitores ou um único escritor.
    let cardapio_state = web::Data::new(RwLock::new(Cardapio { itens }));
    let carrinho_state = web::Data::new(RwLock::new(Carrinho::default()));

    println!("Iniciando API BellaMenu em {}...", bind_addr);

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            // Adiciona o estado compartilhado à aplicação.
            // .clone() é necessário porque a closure é movida
            // e pode ser executada várias vezes.
            .app_data(app_state.clone())
            .app_data(cardapio_state.clone())
            .app_data(carrinho_state.clone())


            // Módulo de Cardápio (rotas públicas)
            .service(cardapio::cardapio_router::buscar_cardapio)
            .service(cardapio::cardapio_router::buscar_categorias)

            // Módulo de Cardápio (rotas administrativas, exigem JWT)
            .service(cardapio::cardapio_router::substituir_cardapio)
            .service(cardapio::cardapio_router::cadastrar_item)
            .service(cardapio::cardapio_router::atualizar_item)
            .service(cardapio::cardapio_router::deletar_item)

            // Módulo de Carrinho
            .service(carrinho::carrinho_router::adicionar_item_carrinho)
            .service(carrinho::carrinho_router::atualizar_quantidade_carrinho)
            .service(carrinho::carrinho_router::remover_item_carrinho)
            .service(carrinho::carrinho_router::ver_carrinho)
            .service(carrinho::carrinho_router::sugestoes_carrinho)

            // Módulo de Pedidos
            .service(pedidos::pedidos_router::enviar_pedido)

            // Módulo de Usuários (login do administrador)
            .service(usuarios::usuario_router::login_admin)
    })
    // Vincula o servidor ao endereço IP e porta. O '?' propaga erros.
    .bind(bind_addr)?
    // Inicia o servidor.
    .run()
    // Aguarda a finalização do servidor.
    .await
}
