// src/cardapio/cardapio_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use std::sync::RwLock;

// Importa as structs e funções do módulo de cardápio
use super::cardapio_filtro::{filtrar_itens, listar_categorias, CATEGORIA_TODAS};
use super::cardapio_storage::salvar_cardapio;
use super::cardapio_structs::{Cardapio, FiltroCardapio, ItemCardapio, NovoItemCardapio};

// Importa GenericResponse do módulo shared_structs
use crate::shared::shared_structs::GenericResponse;
// Importa o extrator de autenticação do módulo de usuários
use crate::usuarios::auth_middleware::AdminAutenticado;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para buscar os itens do cardápio, com filtro opcional por busca livre
/// e por categoria. Sem parâmetros, retorna o cardápio completo.
#[get("/cardapio")]
pub async fn buscar_cardapio(
    cardapio_data: web::Data<RwLock<Cardapio>>,
    filtro: web::Query<FiltroCardapio>,
) -> impl Responder {
    let cardapio = cardapio_data.read().unwrap(); // Obtém um lock de leitura

    let busca = filtro.busca.as_deref().unwrap_or("");
    let categoria = filtro.categoria.as_deref().unwrap_or(CATEGORIA_TODAS);

    let itens = filtrar_itens(&cardapio.itens, busca, categoria);

    HttpResponse::Ok().json(GenericResponse {
        status: "success".to_string(),
        message: format!("{} item(ns) encontrado(s).", itens.len()),
        body: Some(itens),
    })
}

/// Rota para listar as categorias do cardápio: `All` seguida das categorias
/// distintas, na ordem em que aparecem no cardápio.
#[get("/cardapio/categorias")]
pub async fn buscar_categorias(cardapio_data: web::Data<RwLock<Cardapio>>) -> impl Responder {
    let cardapio = cardapio_data.read().unwrap();

    HttpResponse::Ok().json(GenericResponse::sucesso(
        "Categorias do cardápio.",
        listar_categorias(&cardapio.itens),
    ))
}

/// Persiste o cardápio em memória de volta no documento JSON.
/// Retorna a resposta de erro pronta quando a gravação falha.
fn persistir_cardapio(data: &AppState, itens: &[ItemCardapio]) -> Result<(), HttpResponse> {
    if let Err(e) = salvar_cardapio(&data.cardapio_caminho, itens) {
        eprintln!("Erro ao gravar o documento do cardápio: {:?}", e);
        return Err(HttpResponse::InternalServerError()
            .json(GenericResponse::erro("Erro ao gravar o cardápio.")));
    }
    Ok(())
}

/// Rota administrativa para substituir o cardápio inteiro de uma vez.
/// Recebe a lista completa de itens e grava o documento sob o caminho fixo.
#[put("/cardapio")]
pub async fn substituir_cardapio(
    _admin: AdminAutenticado,
    data: web::Data<AppState>,
    cardapio_data: web::Data<RwLock<Cardapio>>,
    itens: web::Json<Vec<ItemCardapio>>,
) -> HttpResponse {
    let itens = itens.into_inner();

    if let Err(resposta) = persistir_cardapio(&data, &itens) {
        return resposta;
    }

    let mut cardapio = cardapio_data.write().unwrap();
    cardapio.itens = itens;

    HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
        "Cardápio substituído com {} item(ns).",
        cardapio.itens.len()
    )))
}

/// Rota administrativa para cadastrar um item novo no cardápio.
/// O id é atribuído pelo servidor como o maior id existente mais um.
#[post("/cardapio")]
pub async fn cadastrar_item(
    _admin: AdminAutenticado,
    data: web::Data<AppState>,
    cardapio_data: web::Data<RwLock<Cardapio>>,
    novo_item: web::Json<NovoItemCardapio>,
) -> HttpResponse {
    let novo_item = novo_item.into_inner();

    // Monta a nova versão do cardápio sem segurar o lock durante a gravação
    let mut itens = cardapio_data.read().unwrap().itens.clone();

    let id = itens.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    itens.push(ItemCardapio {
        id,
        nome: novo_item.nome,
        descricao: novo_item.descricao,
        categoria: novo_item.categoria,
        sub_categoria: novo_item.sub_categoria,
        preco: novo_item.preco,
        preco_promocional: novo_item.preco_promocional,
        imagem: novo_item.imagem,
    });

    // Grava primeiro; o cardápio em memória só muda se o documento foi gravado
    if let Err(resposta) = persistir_cardapio(&data, &itens) {
        return resposta;
    }

    cardapio_data.write().unwrap().itens = itens;

    HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Item cadastrado com sucesso! ID: {}", id),
        serde_json::json!({ "id": id }),
    ))
}

/// Rota administrativa para atualizar um item existente do cardápio.
#[put("/cardapio/{id}")]
pub async fn atualizar_item(
    _admin: AdminAutenticado,
    data: web::Data<AppState>,
    cardapio_data: web::Data<RwLock<Cardapio>>,
    path: web::Path<i32>,
    item_editado: web::Json<NovoItemCardapio>,
) -> HttpResponse {
    let id = path.into_inner();
    let item_editado = item_editado.into_inner();

    let mut itens = cardapio_data.read().unwrap().itens.clone();

    let item = match itens.iter_mut().find(|i| i.id == id) {
        Some(item) => item,
        None => {
            return HttpResponse::NotFound().json(GenericResponse::erro(format!(
                "Item com ID {} não encontrado no cardápio.",
                id
            )));
        }
    };

    item.nome = item_editado.nome;
    item.descricao = item_editado.descricao;
    item.categoria = item_editado.categoria;
    item.sub_categoria = item_editado.sub_categoria;
    item.preco = item_editado.preco;
    item.preco_promocional = item_editado.preco_promocional;
    item.imagem = item_editado.imagem;

    if let Err(resposta) = persistir_cardapio(&data, &itens) {
        return resposta;
    }

    cardapio_data.write().unwrap().itens = itens;

    HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
        "Item com ID {} atualizado com sucesso!",
        id
    )))
}

/// Rota administrativa para remover um item do cardápio.
#[delete("/cardapio/{id}")]
pub async fn deletar_item(
    _admin: AdminAutenticado,
    data: web::Data<AppState>,
    cardapio_data: web::Data<RwLock<Cardapio>>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut itens = cardapio_data.read().unwrap().itens.clone();

    let quantidade_antes = itens.len();
    itens.retain(|i| i.id != id);

    if itens.len() == quantidade_antes {
        return HttpResponse::NotFound().json(GenericResponse::erro(format!(
            "Item com ID {} não encontrado no cardápio.",
            id
        )));
    }

    if let Err(resposta) = persistir_cardapio(&data, &itens) {
        return resposta;
    }

    cardapio_data.write().unwrap().itens = itens;

    HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(format!(
        "Item com ID {} removido do cardápio.",
        id
    )))
}
