// src/pedidos/pedidos_structs.rs

use serde::{Deserialize, Serialize};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use rand::Rng;

// Importa as linhas do carrinho, que são a matéria-prima do pedido
use crate::carrinho::carrinho_structs::ItemCarrinho;

/// Por quantos segundos o cliente deve exibir a confirmação do pedido antes
/// de escondê-la sozinho.
pub const EXIBICAO_CONFIRMACAO_SEGUNDOS: u32 = 10;

/// Dados do cliente informados na finalização do pedido. Transientes: valem
/// só para a composição de um pedido e são descartados após o envio.
#[derive(Deserialize, Clone)]
pub struct DadosCliente {
    pub nome: String,
    pub mesa: String,
}

/// Mensagens de validação por campo, retornadas quando os dados do cliente
/// estão incompletos.
#[derive(Serialize)]
pub struct ErrosValidacao {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesa: Option<String>,
}

/// Valida os dados do cliente: nome e mesa precisam ser não-vazios depois de
/// remover espaços. Retorna as mensagens por campo quando algo falta.
pub fn validar_dados_cliente(dados: &DadosCliente) -> Option<ErrosValidacao> {
    let nome_vazio = dados.nome.trim().is_empty();
    let mesa_vazia = dados.mesa.trim().is_empty();

    if !nome_vazio && !mesa_vazia {
        return None;
    }

    Some(ErrosValidacao {
        nome: if nome_vazio {
            Some("O nome é obrigatório.".to_string())
        } else {
            None
        },
        mesa: if mesa_vazia {
            Some("O número da mesa é obrigatório.".to_string())
        } else {
            None
        },
    })
}

/// Uma linha do pedido: nome, quantidade, preço unitário e subtotal já
/// calculado com 2 casas decimais.
pub struct LinhaPedido {
    pub nome: String,
    pub quantidade: i32,
    pub preco_unitario: BigDecimal,
    pub subtotal: BigDecimal,
}

/// O pedido montado no momento do envio. Derivado, nunca armazenado: é
/// construído, enviado uma única vez e descartado, qualquer que seja o
/// desfecho.
pub struct PedidoPayload {
    pub numero_pedido: u32,
    pub cliente: DadosCliente,
    pub linhas: Vec<LinhaPedido>,
    pub total: BigDecimal,
    pub data_hora: DateTime<Utc>,
}

/// Gera o número do pedido: um inteiro aleatório de 6 dígitos. Não há
/// garantia de unicidade entre pedidos.
pub fn gerar_numero_pedido() -> u32 {
    rand::thread_rng().gen_range(100_000..=999_999)
}

/// Monta o pedido a partir da foto do carrinho e dos dados do cliente.
pub fn montar_payload(
    numero_pedido: u32,
    cliente: &DadosCliente,
    itens: &[ItemCarrinho],
    total: BigDecimal,
) -> PedidoPayload {
    let linhas = itens
        .iter()
        .map(|linha| {
            let quantidade_bigdecimal = BigDecimal::from(linha.quantidade);
            let subtotal = (&linha.item.preco * &quantidade_bigdecimal).with_scale(2);

            LinhaPedido {
                nome: linha.item.nome.clone(),
                quantidade: linha.quantidade,
                preco_unitario: linha.item.preco.clone(),
                subtotal,
            }
        })
        .collect();

    PedidoPayload {
        numero_pedido,
        cliente: cliente.clone(),
        linhas,
        total,
        data_hora: Utc::now(),
    }
}

/// Assunto do e-mail enviado ao serviço de intake.
pub fn montar_assunto(payload: &PedidoPayload) -> String {
    format!(
        "New Order #{} from {}",
        payload.numero_pedido, payload.cliente.nome
    )
}

/// Corpo HTML do pedido: a representação oficial do que foi pedido. O texto
/// fica em inglês porque é o formato que a cozinha já recebe por e-mail.
pub fn montar_html(payload: &PedidoPayload) -> String {
    let mut html = String::new();

    html.push_str("<h1>Order Details</h1>");
    html.push_str(&format!(
        "<p><strong>Customer Name:</strong> {}</p>",
        payload.cliente.nome
    ));
    html.push_str(&format!(
        "<p><strong>Table Number:</strong> {}</p>",
        payload.cliente.mesa
    ));
    html.push_str(&format!(
        "<p><strong>Order Number:</strong> #{}</p>",
        payload.numero_pedido
    ));
    html.push_str("<h2>Items Ordered:</h2>");
    html.push_str("<table border=\"1\">");
    html.push_str("<tr><th>Item</th><th>Quantity</th><th>Price</th><th>Total</th></tr>");

    for linha in payload.linhas.iter() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>₹{}</td><td>₹{}</td></tr>",
            linha.nome, linha.quantidade, linha.preco_unitario, linha.subtotal
        ));
    }

    html.push_str("</table>");
    html.push_str(&format!(
        "<p><strong>Total Amount:</strong> ₹{}</p>",
        payload.total
    ));

    html
}

/// Corpo da requisição enviada ao serviço de intake de pedidos.
#[derive(Serialize)]
pub struct IntakeRequest {
    pub access_key: String,
    pub subject: String,
    pub html: String,
}

/// Resposta do serviço de intake. Só o campo `success` é garantido.
#[derive(Deserialize)]
pub struct RespostaIntake {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Corpo da confirmação devolvida ao cliente após um pedido aceito.
#[derive(Serialize)]
pub struct ConfirmacaoPedido {
    pub numero_pedido: u32,
    pub exibir_por_segundos: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardapio::cardapio_structs::ItemCardapio;

    fn linha_carrinho(id: i32, nome: &str, preco: i32, quantidade: i32) -> ItemCarrinho {
        ItemCarrinho {
            item: ItemCardapio {
                id,
                nome: nome.to_string(),
                descricao: String::new(),
                categoria: "Starters".to_string(),
                sub_categoria: "Veg".to_string(),
                preco: BigDecimal::from(preco),
                preco_promocional: None,
                imagem: String::new(),
            },
            quantidade,
        }
    }

    #[test]
    fn validacao_exige_nome_e_mesa_nao_vazios_apos_trim() {
        let erros = validar_dados_cliente(&DadosCliente {
            nome: "   ".to_string(),
            mesa: "7".to_string(),
        })
        .unwrap();
        assert!(erros.nome.is_some());
        assert!(erros.mesa.is_none());

        let erros = validar_dados_cliente(&DadosCliente {
            nome: String::new(),
            mesa: String::new(),
        })
        .unwrap();
        assert!(erros.nome.is_some());
        assert!(erros.mesa.is_some());

        assert!(validar_dados_cliente(&DadosCliente {
            nome: "Asha".to_string(),
            mesa: "7".to_string(),
        })
        .is_none());
    }

    #[test]
    fn numero_do_pedido_tem_sempre_seis_digitos() {
        for _ in 0..100 {
            let numero = gerar_numero_pedido();
            assert!((100_000..=999_999).contains(&numero));
        }
    }

    #[test]
    fn payload_calcula_subtotais_por_linha() {
        let cliente = DadosCliente {
            nome: "Asha".to_string(),
            mesa: "7".to_string(),
        };
        let itens = vec![
            linha_carrinho(1, "Paneer Tikka", 180, 2),
            linha_carrinho(2, "Butter Naan", 40, 1),
        ];

        let payload = montar_payload(123456, &cliente, &itens, BigDecimal::from(400));

        assert_eq!(payload.numero_pedido, 123456);
        assert_eq!(payload.linhas.len(), 2);
        assert_eq!(payload.linhas[0].subtotal, BigDecimal::from(360));
        assert_eq!(payload.linhas[1].subtotal, BigDecimal::from(40));
        assert_eq!(payload.total, BigDecimal::from(400));
    }

    #[test]
    fn html_contem_itens_numero_e_total() {
        let cliente = DadosCliente {
            nome: "Asha".to_string(),
            mesa: "7".to_string(),
        };
        let itens = vec![linha_carrinho(1, "Paneer Tikka", 180, 2)];
        let payload = montar_payload(654321, &cliente, &itens, BigDecimal::from(360));

        let html = montar_html(&payload);
        assert!(html.contains("Paneer Tikka"));
        assert!(html.contains("#654321"));
        assert!(html.contains("Table Number:</strong> 7"));
        assert!(html.contains("Total Amount:"));

        let assunto = montar_assunto(&payload);
        assert_eq!(assunto, "New Order #654321 from Asha");
    }

    #[test]
    fn resposta_do_intake_aceita_corpo_sem_message() {
        let resposta: RespostaIntake = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resposta.success);
        assert!(resposta.message.is_none());
    }
}
