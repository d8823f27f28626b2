// src/pedidos/pedidos_router.rs

use actix_web::{post, web, HttpResponse};
use std::sync::RwLock;

// Importa o carrinho, fonte das linhas do pedido
use crate::carrinho::carrinho_structs::Carrinho;
// Importa GenericResponse do módulo shared_structs
use crate::shared::shared_structs::GenericResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;
// Importa as structs e a montagem do pedido
use super::pedidos_structs::{
    gerar_numero_pedido, montar_assunto, montar_html, montar_payload, validar_dados_cliente,
    ConfirmacaoPedido, DadosCliente, IntakeRequest, RespostaIntake,
    EXIBICAO_CONFIRMACAO_SEGUNDOS,
};

/// Rota para enviar o pedido atual ao serviço de intake.
///
/// Passos:
/// 1. Valida os dados do cliente; qualquer campo faltando aborta sem tocar a
///    rede e devolve as mensagens por campo.
/// 2. Um carrinho vazio é tratado como não-operação, não como erro.
/// 3. Gera o número do pedido, monta o payload e faz uma única tentativa de
///    envio. Não há chave de idempotência: reenviar depois de uma falha
///    transitória pode duplicar o pedido do lado de lá.
/// 4. Só depois do `success: true` do intake o carrinho é esvaziado; em
///    qualquer falha o carrinho e os dados ficam intactos para nova tentativa.
#[post("/pedido")]
pub async fn enviar_pedido(
    data: web::Data<AppState>,
    carrinho_data: web::Data<RwLock<Carrinho>>,
    dados_cliente: web::Json<DadosCliente>,
) -> HttpResponse {
    // 1. Valida os dados do cliente
    if let Some(erros) = validar_dados_cliente(&dados_cliente) {
        return HttpResponse::BadRequest().json(GenericResponse {
            status: "error".to_string(),
            message: "Dados do cliente incompletos.".to_string(),
            body: Some(erros),
        });
    }

    // 2. Tira uma foto do carrinho. O lock é liberado antes de qualquer
    // await; o carrinho segue utilizável enquanto o envio está pendente.
    let (itens, total) = {
        let carrinho = carrinho_data.read().unwrap();
        if carrinho.esta_vazio() {
            return HttpResponse::Ok().json(GenericResponse::sucesso_sem_corpo(
                "O carrinho está vazio. Nenhum pedido foi enviado.",
            ));
        }
        (carrinho.itens().to_vec(), carrinho.total())
    };

    // 3. Monta o pedido
    let numero_pedido = gerar_numero_pedido();
    let payload = montar_payload(numero_pedido, &dados_cliente, &itens, total);

    let corpo = IntakeRequest {
        access_key: data.intake_access_key.clone(),
        subject: montar_assunto(&payload),
        html: montar_html(&payload),
    };

    // 4. Uma única tentativa de envio
    let resposta = match data
        .http_client
        .post(&data.intake_url)
        .json(&corpo)
        .send()
        .await
    {
        Ok(resposta) => resposta,
        Err(e) => {
            eprintln!("Erro ao enviar pedido ao intake: {:?}", e);
            return HttpResponse::BadGateway().json(GenericResponse::erro(
                "Falha ao enviar o pedido. Tente novamente.",
            ));
        }
    };

    let resultado = match resposta.json::<RespostaIntake>().await {
        Ok(resultado) => resultado,
        Err(e) => {
            eprintln!("Resposta inválida do intake: {:?}", e);
            return HttpResponse::BadGateway().json(GenericResponse::erro(
                "Falha ao enviar o pedido. Tente novamente.",
            ));
        }
    };

    if !resultado.success {
        eprintln!(
            "Intake recusou o pedido #{}: {:?}",
            numero_pedido, resultado.message
        );
        return HttpResponse::BadGateway().json(GenericResponse::erro(
            "Falha ao enviar o pedido. Tente novamente.",
        ));
    }

    // 5. Pedido confirmado: esvazia o carrinho
    carrinho_data.write().unwrap().limpar();

    HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Pedido #{} realizado com sucesso!", numero_pedido),
        ConfirmacaoPedido {
            numero_pedido,
            exibir_por_segundos: EXIBICAO_CONFIRMACAO_SEGUNDOS,
        },
    ))
}
