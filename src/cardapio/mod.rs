// src/cardapio/mod.rs

// Declara o submódulo que contém as definições das structs do cardápio
pub mod cardapio_structs;
// Declara o submódulo com a filtragem pura do cardápio (busca + categoria)
pub mod cardapio_filtro;
// Declara o submódulo que lê/grava o documento JSON do cardápio
pub mod cardapio_storage;
// Declara o submódulo que contém as funções de rota relacionadas ao cardápio
pub mod cardapio_router;
