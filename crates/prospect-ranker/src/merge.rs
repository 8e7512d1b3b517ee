//! Left outer join of the contact roster against the publication roster.

use std::collections::HashMap;

use prospect_common::{ContactRecord, MergedLead, PublicationRecord};

use crate::normalise::normalise_name;

/// Join contacts with publications on the normalised name key.
///
/// Every contact appears at least once. A contact matching several
/// publications emits one row per publication, in publication file order
/// (fan-out is accepted, not deduplicated); a contact matching none emits a
/// single row with absent publication fields. Contact file order is
/// preserved.
///
/// Key collisions between distinct real-world people join like any other
/// match; there is no secondary disambiguation key. Names that normalise to
/// the empty string join each other the same way.
pub fn merge_rosters(
    contacts: &[ContactRecord],
    publications: &[PublicationRecord],
) -> Vec<MergedLead> {
    let mut by_key: HashMap<String, Vec<&PublicationRecord>> = HashMap::new();
    for publication in publications {
        let key = normalise_name(publication.name.as_deref());
        by_key.entry(key).or_default().push(publication);
    }

    let mut leads = Vec::with_capacity(contacts.len());
    for contact in contacts {
        let key = normalise_name(contact.name.as_deref());
        match by_key.get(&key) {
            Some(matches) => {
                for publication in matches {
                    leads.push(MergedLead::matched(contact, key.clone(), publication));
                }
            }
            None => leads.push(MergedLead::unmatched(contact, key)),
        }
    }
    leads
}

// ── Tests ───────────────────────────────────────────────────────────────────
