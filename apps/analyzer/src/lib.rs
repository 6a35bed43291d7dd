//! CV analysis pipeline: PDF text extraction, a JSON-mode completion call, and a
//! typed critique, plus the HTTP shell that exposes it.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;
