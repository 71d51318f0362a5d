//! Adapters for the domain ports: the HTTP orders client, file-backed and
//! in-memory client storage, and recording navigator/notifier doubles.

pub mod file_storage;
pub mod http;
pub mod in_memory;
