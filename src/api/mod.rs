/*
 * Responsibility
 * - Root of the HTTP API; one submodule per version
 */
pub mod v1;
