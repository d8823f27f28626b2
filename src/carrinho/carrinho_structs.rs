// src/carrinho/carrinho_structs.rs

use serde::{Deserialize, Serialize};
use bigdecimal::BigDecimal;

// Importa ItemCardapio: cada linha do carrinho carrega uma cópia do item
use crate::cardapio::cardapio_structs::ItemCardapio;

/// Uma linha do carrinho: uma cópia do item do cardápio mais a quantidade
/// desejada. A cópia garante que o carrinho nunca muta o cardápio.
#[derive(Serialize, Clone)]
pub struct ItemCarrinho {
    pub item: ItemCardapio,
    pub quantidade: i32,
}

/// Estrutura para receber o pedido de adição de um item ao carrinho.
#[derive(Deserialize)]
pub struct AdicionarItemRequest {
    pub item_id: i32,
}

/// Estrutura para receber a atualização de quantidade de uma linha.
#[derive(Deserialize)]
pub struct AtualizarQuantidadeRequest {
    pub item_id: i32,
    pub quantidade: i32,
}

/// Estrutura para a resposta da rota de visualização do carrinho.
#[derive(Serialize)]
pub struct CarrinhoResponse {
    pub itens: Vec<ItemCarrinho>,
    pub total: BigDecimal,
}

/// O carrinho de compras em memória: a única fonte de verdade do pedido em
/// andamento.
///
/// O vetor de linhas é privado; toda mutação passa pelas operações abaixo,
/// que preservam os invariantes: no máximo uma linha por id de item e
/// quantidade sempre maior ou igual a 1.
#[derive(Default)]
pub struct Carrinho {
    itens: Vec<ItemCarrinho>,
}

impl Carrinho {
    /// Visão somente-leitura das linhas do carrinho.
    pub fn itens(&self) -> &[ItemCarrinho] {
        &self.itens
    }

    pub fn esta_vazio(&self) -> bool {
        self.itens.is_empty()
    }

    /// Adiciona um item ao carrinho. Se já existe uma linha com o mesmo id,
    /// soma 1 à quantidade em vez de duplicar a linha. Sempre tem sucesso.
    pub fn adicionar_item(&mut self, item: ItemCardapio) {
        for linha in self.itens.iter_mut() {
            if linha.item.id == item.id {
                linha.quantidade += 1;
                return;
            }
        }

        self.itens.push(ItemCarrinho {
            item,
            quantidade: 1,
        });
    }

    /// Define a quantidade de uma linha, limitada a no mínimo 1. Quantidades
    /// menores nunca removem a linha; remover é uma operação separada. Se não
    /// existe linha com o id, nada acontece.
    pub fn atualizar_quantidade(&mut self, id: i32, quantidade: i32) {
        for linha in self.itens.iter_mut() {
            if linha.item.id == id {
                linha.quantidade = quantidade.max(1);
                return;
            }
        }
    }

    /// Remove a linha com o id, se presente.
    pub fn remover_item(&mut self, id: i32) {
        self.itens.retain(|linha| linha.item.id != id);
    }

    /// Esvazia o carrinho. Chamado após a confirmação de um pedido.
    pub fn limpar(&mut self) {
        self.itens.clear();
    }

    /// Total do carrinho: soma de preço vezes quantidade de cada linha,
    /// arredondado para 2 casas decimais. Derivado, nunca armazenado.
    pub fn total(&self) -> BigDecimal {
        let mut total = BigDecimal::from(0);

        for linha in self.itens.iter() {
            let quantidade_bigdecimal = BigDecimal::from(linha.quantidade);
            let subtotal = &linha.item.preco * &quantidade_bigdecimal;
            total += subtotal;
        }

        total.with_scale(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, nome: &str, preco: i32, categoria: &str) -> ItemCardapio {
        ItemCardapio {
            id,
            nome: nome.to_string(),
            descricao: String::new(),
            categoria: categoria.to_string(),
            sub_categoria: "Veg".to_string(),
            preco: BigDecimal::from(preco),
            preco_promocional: None,
            imagem: String::new(),
        }
    }

    #[test]
    fn adicionar_o_mesmo_item_soma_quantidade_em_uma_unica_linha() {
        let mut carrinho = Carrinho::default();

        for _ in 0..5 {
            carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        }

        assert_eq!(carrinho.itens().len(), 1);
        assert_eq!(carrinho.itens()[0].quantidade, 5);
    }

    #[test]
    fn atualizar_quantidade_limita_a_um_e_nunca_remove_a_linha() {
        let mut carrinho = Carrinho::default();
        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));

        carrinho.atualizar_quantidade(1, 0);
        assert_eq!(carrinho.itens()[0].quantidade, 1);

        carrinho.atualizar_quantidade(1, -7);
        assert_eq!(carrinho.itens()[0].quantidade, 1);
        assert_eq!(carrinho.itens().len(), 1);

        carrinho.atualizar_quantidade(1, 4);
        assert_eq!(carrinho.itens()[0].quantidade, 4);
    }

    #[test]
    fn atualizar_quantidade_de_id_ausente_nao_cria_linha() {
        let mut carrinho = Carrinho::default();
        carrinho.atualizar_quantidade(99, 3);
        assert!(carrinho.esta_vazio());
    }

    #[test]
    fn remover_e_adicionar_de_novo_comeca_com_quantidade_um() {
        let mut carrinho = Carrinho::default();

        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        assert_eq!(carrinho.itens()[0].quantidade, 2);

        carrinho.remover_item(1);
        assert!(carrinho.esta_vazio());

        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        assert_eq!(carrinho.itens()[0].quantidade, 1);
    }

    #[test]
    fn remover_id_ausente_nao_faz_nada() {
        let mut carrinho = Carrinho::default();
        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));

        carrinho.remover_item(99);
        assert_eq!(carrinho.itens().len(), 1);
    }

    #[test]
    fn total_soma_preco_vezes_quantidade_de_cada_linha() {
        let mut carrinho = Carrinho::default();

        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        carrinho.adicionar_item(item(2, "Butter Naan", 40, "Breads"));

        assert_eq!(carrinho.itens().len(), 2);
        assert_eq!(carrinho.itens()[0].quantidade, 2);
        assert_eq!(carrinho.itens()[1].quantidade, 1);

        // 180 * 2 + 40 * 1 = 400
        assert_eq!(carrinho.total(), BigDecimal::from(400));
    }

    #[test]
    fn limpar_esvazia_o_carrinho() {
        let mut carrinho = Carrinho::default();
        carrinho.adicionar_item(item(1, "Paneer Tikka", 180, "Starters"));
        carrinho.adicionar_item(item(2, "Butter Naan", 40, "Breads"));

        carrinho.limpar();
        assert!(carrinho.esta_vazio());
        assert_eq!(carrinho.total(), BigDecimal::from(0));
    }
}
