// src/usuarios/mod.rs

// Declara o submódulo que contém as definições das structs de usuários
pub mod usuario_structs;
// Tabela de credenciais, imutável após a inicialização
pub mod credenciais;
// Emissão e validação de tokens
pub mod auth_service;
// Declara o submódulo que contém as funções de rota relacionadas a usuários
pub mod usuario_router;
// Extrator que protege as rotas administrativas
pub mod auth_middleware;
