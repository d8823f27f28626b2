// src/pedidos/mod.rs

// Declara o submódulo que contém as structs e a montagem do pedido
pub mod pedidos_structs;
// Declara o submódulo que contém a rota de envio do pedido
pub mod pedidos_router;
