//! Remote speech-to-text and text-rewrite collaborators.
//!
//! One `ApiClient` is built per pipeline run and shared by both collaborators;
//! there is no ambient global client. The traits keep the network edge
//! mockable so the pipeline tests never touch it.

pub mod client;
pub mod rewrite;
pub mod transcribe;
