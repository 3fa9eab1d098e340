//! Duplicate document removal
//!
//! Two documents are duplicates when their sets of distinct indexed terms
//! are equal; word order, repetition and stop words are ignored.

use crate::server::SearchServer;
use lexis_core::{DocumentId, Term};
use rustc_hash::FxHashMap;

/// Remove every duplicate document except the one with the lowest id
///
/// Returns the removed ids in ascending order.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocumentId> {
    let mut seen: FxHashMap<Vec<Term>, DocumentId> = FxHashMap::default();
    let mut duplicates = Vec::new();

    for id in server.document_ids() {
        let terms: Vec<Term> = server.word_frequencies(id).keys().cloned().collect();
        match seen.get(&terms) {
            Some(&original) => duplicates.push((id, original)),
            None => {
                seen.insert(terms, id);
            }
        }
    }

    for &(id, original) in &duplicates {
        tracing::info!(
            target: "lexis::search",
            document_id = id,
            duplicate_of = original,
            "Found duplicate document"
        );
        server.remove_document(id);
    }
    duplicates.into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::DocumentStatus;

    #[test]
    fn test_remove_duplicates() {
        let mut server = SearchServer::from_stop_words_text("and with").unwrap();
        let docs = [
            (1, "funny pet and nasty rat"),
            (2, "funny pet with curly hair"),
            (3, "funny pet with curly hair"),
            (4, "funny pet and curly hair"),
            (5, "funny funny pet and nasty nasty rat"),
            (6, "funny pet and not very nasty rat"),
            (7, "very nasty rat and not very funny pet"),
            (8, "pet with rat and rat and rat"),
            (9, "nasty rat with curly hair"),
        ];
        for (id, text) in docs {
            server
                .add_document(id, text, DocumentStatus::Active, &[1, 2])
                .unwrap();
        }

        let removed = remove_duplicates(&mut server);

        assert_eq!(removed, vec![3, 4, 5, 7]);
        assert_eq!(
            server.document_ids().collect::<Vec<_>>(),
            vec![1, 2, 6, 8, 9]
        );
    }

    #[test]
    fn test_no_duplicates() {
        let mut server = SearchServer::new(Vec::<String>::new()).unwrap();
        server
            .add_document(1, "a b", DocumentStatus::Active, &[])
            .unwrap();
        server
            .add_document(2, "a c", DocumentStatus::Active, &[])
            .unwrap();
        assert!(remove_duplicates(&mut server).is_empty());
        assert_eq!(server.document_count(), 2);
    }

    #[test]
    fn test_empty_documents_are_duplicates() {
        let mut server = SearchServer::from_stop_words_text("the").unwrap();
        server
            .add_document(4, "the", DocumentStatus::Active, &[])
            .unwrap();
        server
            .add_document(2, "", DocumentStatus::Active, &[])
            .unwrap();
        assert_eq!(remove_duplicates(&mut server), vec![4]);
    }
}
