/*
 * Responsibility
 * - Public interface of the middleware layers
 * - auth: protect / admin gates for /api/v1
 * - http / cors / security_headers: applied once to the whole app
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
