use polyrun_core::{SourceUnit, PROMPT_VERSION};
use sha2::{Digest, Sha256};
use std::fmt;

/// Lowercase hex SHA-256 digest identifying one translation request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a source unit, independent of the translating model
    pub fn for_unit(unit: &SourceUnit) -> Self {
        compute_key(unit.text(), unit.language_hint(), unit.id())
    }

    /// Key for translating `unit` with `model` at `base_url`.
    ///
    /// Translations from different models or endpoints never share a key.
    pub fn for_request(unit: &SourceUnit, model: &str, base_url: &str) -> Self {
        compute_request_key(
            unit.text(),
            unit.language_hint(),
            unit.id(),
            Some(TranslatorIdentity { model, base_url }),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-character shard directory name
    pub fn shard(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the cache key for `(text, language_hint, source_id)`.
///
/// Each field is written as a label, its byte length as a little-endian u64,
/// then its bytes, so no choice of field contents can collide with another
/// split of the same bytes. A missing hint gets its own label.
pub fn compute_key(text: &str, language_hint: Option<&str>, source_id: &str) -> CacheKey {
    compute_request_key(text, language_hint, source_id, None)
}

/// Model and endpoint that produce a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorIdentity<'a> {
    pub model: &'a str,
    pub base_url: &'a str,
}

/// [`compute_key`] extended with the translator that will serve the request.
///
/// Trailing slashes on the base URL are ignored.
pub fn compute_request_key(
    text: &str,
    language_hint: Option<&str>,
    source_id: &str,
    translator: Option<TranslatorIdentity<'_>>,
) -> CacheKey {
    let mut hasher = Sha256::new();
    frame(&mut hasher, b"domain", format!("polyrun/cache-key/{PROMPT_VERSION}").as_bytes());
    frame(&mut hasher, b"text", text.as_bytes());
    match language_hint {
        Some(hint) => frame(&mut hasher, b"hint", hint.as_bytes()),
        None => frame(&mut hasher, b"no-hint", &[]),
    }
    frame(&mut hasher, b"id", source_id.as_bytes());
    match translator {
        Some(identity) => {
            frame(&mut hasher, b"model", identity.model.as_bytes());
            frame(
                &mut hasher,
                b"endpoint",
                identity.base_url.trim_end_matches('/').as_bytes(),
            );
        }
        None => frame(&mut hasher, b"no-translator", &[]),
    }

    CacheKey(format!("{:x}", hasher.finalize()))
}

fn frame(hasher: &mut Sha256, label: &[u8], bytes: &[u8]) {
    hasher.update((label.len() as u64).to_le_bytes());
    hasher.update(label);
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
