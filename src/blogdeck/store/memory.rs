use super::PostSource;
use std::future::Future;

/// Serves a fixed payload from memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    payload: Vec<u8>,
}

impl MemorySource {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl PostSource for MemorySource {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn fetch(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send {
        let payload = self.payload.clone();
        async move { Ok(payload) }
    }
}
