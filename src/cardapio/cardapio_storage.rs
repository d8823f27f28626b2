// src/cardapio/cardapio_storage.rs

use std::fs;
use std::io::{Error, ErrorKind};

use super::cardapio_structs::{DocumentoCardapio, ItemCardapio};

/// Carrega o cardápio a partir do documento JSON.
///
/// Qualquer falha (arquivo ausente, JSON inválido, campo `foodItems` com o
/// formato errado) degrada para um cardápio vazio, mantendo o restante da
/// aplicação utilizável.
pub fn carregar_cardapio(caminho: &str) -> Vec<ItemCardapio> {
    let conteudo = match fs::read_to_string(caminho) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Erro ao ler o documento do cardápio em {}: {:?}", caminho, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<DocumentoCardapio>(&conteudo) {
        Ok(documento) => documento.itens,
        Err(e) => {
            eprintln!("Documento do cardápio inválido em {}: {:?}", caminho, e);
            Vec::new()
        }
    }
}

/// Grava o cardápio inteiro de volta no documento JSON, sob o mesmo caminho
/// fixo. Usado apenas pelas rotas administrativas.
pub fn salvar_cardapio(caminho: &str, itens: &[ItemCardapio]) -> Result<(), Error> {
    let documento = DocumentoCardapio {
        itens: itens.to_vec(),
    };

    let conteudo = serde_json::to_string_pretty(&documento)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    fs::write(caminho, conteudo)
}
