//! Builder für die Bubble-Szene aus der Mitgliederliste.
//!
//! Reine Funktion: gleiche Liste → gleiche Szene. Der Aufrufer ersetzt die
//! bisherige Szene vollständig (kein inkrementelles Diffing).

use crate::core::MemberRecord;
use crate::shared::{BubbleScene, BubbleView};

/// Baut eine BubbleScene aus der aktuellen Mitgliederliste.
pub fn build(members: &[MemberRecord]) -> BubbleScene {
    BubbleScene::new(members.iter().map(bubble_for).collect())
}

/// Beschreibt die Bubble eines einzelnen Mitglieds.
pub fn bubble_for(member: &MemberRecord) -> BubbleView {
    BubbleView {
        member_id: member.id.clone(),
        name: member.name.clone(),
        relation: member.relation.clone(),
        relation_key: relation_key(&member.relation),
        birth_label: member
            .birth_year
            .as_ref()
            .map(|year| format!("Born {year}")),
        photo: member.photo.clone(),
        position: member.position,
        elevated: false,
        delete_prompt: format!("Delete {}?", member.name),
    }
}

/// Stil-Schluessel einer Beziehung: klein geschrieben, erstes `/` → `-`.
pub fn relation_key(relation: &str) -> String {
    relation.to_lowercase().replacen('/', "-", 1)
}
