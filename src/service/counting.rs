//! Request counting around the generation entry points
//!
//! Wraps any [`PasswordGeneration`] and bumps the shared counter once per
//! logical password before delegating.

use std::sync::Arc;

use async_trait::async_trait;

use crate::counter::RequestCounter;
use crate::error::Result;
use crate::models::PasswordGenerationRequest;
use crate::password::Complexity;
use crate::service::PasswordGeneration;

/// Counting decorator.
///
/// Increments happen before the inner call and regardless of its outcome:
/// cache hits, fresh generations and rejected batches all count.
pub struct CountingPasswordService<G> {
    inner: G,
    counter: Arc<RequestCounter>,
}

impl<G: PasswordGeneration> CountingPasswordService<G> {
    pub fn new(inner: G, counter: Arc<RequestCounter>) -> Self {
        Self { inner, counter }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: PasswordGeneration> PasswordGeneration for CountingPasswordService<G> {
    fn generate_password(&self, length: usize, complexity: Complexity) -> String {
        self.counter.increment();
        self.inner.generate_password(length, complexity)
    }

    async fn generate_passwords_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>> {
        for _ in requests.iter().flatten() {
            self.counter.increment();
        }
        self.inner.generate_passwords_bulk(requests).await
    }
}
