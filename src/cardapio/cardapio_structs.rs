// src/cardapio/cardapio_structs.rs

use serde::{Deserialize, Serialize};
use bigdecimal::BigDecimal;

/// Estrutura que representa um item do cardápio.
///
/// Os nomes dos campos no JSON seguem o formato do documento do cardápio
/// (`db.json`), que usa chaves em inglês no estilo camelCase. O campo
/// `discountPrice` é apenas informativo e nunca entra no cálculo de totais.
#[derive(Serialize, Deserialize, Clone)]
pub struct ItemCardapio {
    pub id: i32,
    #[serde(rename = "name")]
    pub nome: String,
    #[serde(rename = "description")]
    pub descricao: String,
    #[serde(rename = "category")]
    pub categoria: String,
    #[serde(rename = "subCategory")]
    pub sub_categoria: String,
    #[serde(rename = "price")]
    pub preco: BigDecimal,
    #[serde(rename = "discountPrice", skip_serializing_if = "Option::is_none")]
    pub preco_promocional: Option<BigDecimal>,
    #[serde(rename = "image")]
    pub imagem: String,
}

/// Estrutura para receber os dados de um item novo (ou editado) do cardápio.
/// O `id` é atribuído pelo servidor no cadastro.
#[derive(Deserialize)]
pub struct NovoItemCardapio {
    #[serde(rename = "name")]
    pub nome: String,
    #[serde(rename = "description")]
    pub descricao: String,
    #[serde(rename = "category")]
    pub categoria: String,
    #[serde(rename = "subCategory")]
    pub sub_categoria: String,
    #[serde(rename = "price")]
    pub preco: BigDecimal,
    #[serde(rename = "discountPrice")]
    pub preco_promocional: Option<BigDecimal>,
    #[serde(rename = "image")]
    pub imagem: String,
}

/// Documento JSON do cardápio: um único campo `foodItems` com a lista de itens.
#[derive(Serialize, Deserialize)]
pub struct DocumentoCardapio {
    #[serde(rename = "foodItems")]
    pub itens: Vec<ItemCardapio>,
}

/// Estrutura para representar o cardápio em memória, compartilhado entre as
/// rotas. O cardápio só é mutado pelas rotas administrativas.
#[derive(Default)]
pub struct Cardapio {
    pub itens: Vec<ItemCardapio>,
}

/// Parâmetros de consulta da rota de busca do cardápio.
#[derive(Deserialize)]
pub struct FiltroCardapio {
    pub busca: Option<String>,
    pub categoria: Option<String>,
}
