use alloc::format;
use alloc::string::ToString;

use rkyv::{AlignedVec, Deserialize, Infallible};

use crate::lexicon::LexiconError;
use crate::model::LanguagePack;

/// Validates and deserializes an rkyv-compiled [`LanguagePack`].
///
/// The bytes are copied into an aligned buffer first, so callers can pass
/// whatever `fs::read` or `fetch()` handed them.
pub fn load_pack(bytes: &[u8]) -> Result<LanguagePack, LexiconError> {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<LanguagePack>(&aligned)
        .map_err(|e| LexiconError::InvalidArchive(format!("{:?}", e)))?;

    archived
        .deserialize(&mut Infallible)
        .map_err(|_| LexiconError::InvalidArchive("deserialization failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_pack_archive_loads() {
        let pack = builtin::linara();
        let bytes = rkyv::to_bytes::<_, 4096>(&pack).expect("Failed to serialize LanguagePack");

        let loaded = load_pack(&bytes).expect("Failed to load LanguagePack");
        assert_eq!(loaded, pack);
    }

    #[test]
    fn test_garbage_rejected() {
        let err = load_pack(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidArchive(_)));
    }
}
