// src/cardapio/cardapio_filtro.rs

use super::cardapio_structs::ItemCardapio;

/// Categoria sentinela que corresponde a qualquer item.
/// O valor segue o documento do cardápio, que usa chaves em inglês.
pub const CATEGORIA_TODAS: &str = "All";

/// Filtra os itens do cardápio pela busca livre e pela categoria selecionada.
///
/// Um item corresponde à busca quando o texto (sem distinção de maiúsculas)
/// aparece no nome, na categoria OU na descrição. A categoria corresponde
/// quando a selecionada é `All` ou igual à categoria do item. O resultado
/// preserva a ordem original do cardápio; uma busca vazia corresponde a todos
/// os itens.
pub fn filtrar_itens(itens: &[ItemCardapio], busca: &str, categoria: &str) -> Vec<ItemCardapio> {
    let busca = busca.to_lowercase();

    itens
        .iter()
        .filter(|item| {
            let corresponde_busca = item.nome.to_lowercase().contains(&busca)
                || item.categoria.to_lowercase().contains(&busca)
                || item.descricao.to_lowercase().contains(&busca);

            let corresponde_categoria =
                categoria == CATEGORIA_TODAS || item.categoria == categoria;

            corresponde_busca && corresponde_categoria
        })
        .cloned()
        .collect()
}

/// Deriva a lista de categorias do cardápio: `All` seguida das categorias
/// distintas, na ordem da primeira aparição.
pub fn listar_categorias(itens: &[ItemCardapio]) -> Vec<String> {
    let mut categorias = vec![CATEGORIA_TODAS.to_string()];

    for item in itens {
        if !categorias.contains(&item.categoria) {
            categorias.push(item.categoria.clone());
        }
    }

    categorias
}
