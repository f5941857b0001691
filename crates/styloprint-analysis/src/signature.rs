use styloprint_types::Document;

/// BLAKE3 hex digest over ids, dates, and contents in the given order.
///
/// An empty corpus has an empty signature.
pub fn corpus_signature(docs: &[&Document]) -> String {
    if docs.is_empty() {
        return String::new();
    }
    let mut hasher = blake3::Hasher::new();
    for doc in docs {
        hasher.update(doc.id.as_bytes());
        hasher.update(b"\0");
        hasher.update(doc.date.to_rfc3339().as_bytes());
        hasher.update(b"\0");
        hasher.update(doc.content.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}
