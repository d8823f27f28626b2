// src/carrinho/mod.rs

// Declara o submódulo que contém o carrinho e suas operações
pub mod carrinho_structs;
// Declara o submódulo que contém as funções de rota relacionadas ao carrinho
pub mod carrinho_router;
