//! Cache key derivation
//!
//! Keys are plain concatenations of the lookup parameters.

use crate::models::PasswordGenerationRequest;
use crate::password::Complexity;

/// Separator between the per-request parts of a bulk key.
pub const BULK_KEY_DELIMITER: &str = "|";

/// Key of the generated-password domain: `"{length}_{complexity}"`.
pub fn generated_password_key(length: usize, complexity: Complexity) -> String {
    format!("{}_{}", length, complexity.tier())
}

/// Key of the bulk domain: each request's `"{length}_{complexity}_{owner}"`
/// joined by [`BULK_KEY_DELIMITER`], in request order.
pub fn bulk_key<'a, I>(requests: I) -> String
where
    I: IntoIterator<Item = &'a PasswordGenerationRequest>,
{
    requests
        .into_iter()
        .map(|r| format!("{}_{}_{}", r.length, r.complexity, r.owner))
        .collect::<Vec<_>>()
        .join(BULK_KEY_DELIMITER)
}
