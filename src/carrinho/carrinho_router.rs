// src/carrinho/carrinho_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use std::sync::RwLock;

// Importa as structs do carrinho
use super::carrinho_structs::{
    AdicionarItemRequest, AtualizarQuantidadeRequest, Carrinho, CarrinhoResponse,
};
// Importa o cardápio compartilhado e o storage (para as sugestões)
use crate::cardapio::cardapio_storage::carregar_cardapio;
use crate::cardapio::cardapio_structs::Cardapio;
// Importa GenericResponse do módulo shared_structs
use crate::shared::shared_structs::GenericResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para adicionar um item do cardápio ao carrinho.
///
/// O item é resolvido pelo id no cardápio compartilhado; o carrinho guarda
/// uma cópia. Se o item já está no carrinho, a quantidade sobe em 1.
#[post("/carrinho/adicionar")]
pub async fn adicionar_item_carrinho(
    cardapio_data: web::Data<RwLock<Cardapio>>,
    carrinho_data: web::Data<RwLock<Carrinho>>,
    pedido: web::Json<AdicionarItemRequest>,
) -> HttpResponse {
    // Verifica se o item existe no cardápio
    let item = {
        let cardapio = cardapio_data.read().unwrap();
        cardapio
            .itens
            .iter()
            .find(|i| i.id == pedido.item_id)
            .cloned()
    };

    match item {
        Some(item) => {
            let nome = item.nome.clone();
            let mut carrinho = carrinho_data.write().unwrap(); // Obtém um lock de escrita
            carrinho.adicionar_item(item);

            HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
                "{} adicionado ao carrinho!",
                nome
            )))
        }
        None => HttpResponse::BadRequest().json(GenericResponse::erro(format!(
            "Item com ID {} não encontrado no cardápio.",
            pedido.item_id
        ))),
    }
}

/// Rota para definir a quantidade de uma linha do carrinho.
/// Valores menores que 1 são limitados a 1; um id ausente é ignorado.
#[put("/carrinho/quantidade")]
pub async fn atualizar_quantidade_carrinho(
    carrinho_data: web::Data<RwLock<Carrinho>>,
    pedido: web::Json<AtualizarQuantidadeRequest>,
) -> HttpResponse {
    let mut carrinho = carrinho_data.write().unwrap();
    carrinho.atualizar_quantidade(pedido.item_id, pedido.quantidade);

    HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(
        "Quantidade atualizada.",
    ))
}

/// Rota para remover uma linha do carrinho.
#[delete("/carrinho/{id}")]
pub async fn remover_item_carrinho(
    carrinho_data: web::Data<RwLock<Carrinho>>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut carrinho = carrinho_data.write().unwrap();
    carrinho.remover_item(id);

    HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(
        "Item removido do carrinho.",
    ))
}

/// Rota para visualizar o conteúdo atual do carrinho, com o total calculado.
#[get("/carrinho")]
pub async fn ver_carrinho(carrinho_data: web::Data<RwLock<Carrinho>>) -> HttpResponse {
    let carrinho = carrinho_data.read().unwrap(); // Obtém um lock de leitura

    HttpResponse::Ok().json(GenericResponse::sucesso(
        "Conteúdo do carrinho.",
        CarrinhoResponse {
            itens: carrinho.itens().to_vec(),
            total: carrinho.total(),
        },
    ))
}

/// Rota de sugestões ("você também pode gostar"), exibida junto do carrinho.
///
/// Relê o mesmo documento do cardápio, em melhor esforço: qualquer falha é
/// registrada e degrada para uma lista vazia, nunca para um erro.
#[get("/carrinho/sugestoes")]
pub async fn sugestoes_carrinho(data: web::Data<AppState>) -> HttpResponse {
    let sugestoes = carregar_cardapio(&data.cardapio_caminho);

    HttpResponse::Ok().json(GenericResponse::sucesso(
        "Sugestões para o seu pedido.",
        sugestoes,
    ))
}
