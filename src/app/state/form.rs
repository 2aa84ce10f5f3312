/// Eingaben des Hinzufuegen-Formulars (Rohtext)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub relation: String,
    pub birth_year: String,
    pub notes: String,
}

/// Validierte Formulardaten
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInput {
    pub name: String,
    pub relation: String,
    pub birth_year: Option<String>,
    pub notes: Option<String>,
}

impl MemberForm {
    /// Prueft Pflichtfelder und normalisiert optionale Felder.
    ///
    /// Name und Notizen werden getrimmt, leere optionale Felder werden `None`.
    /// `None`, wenn Name oder Beziehung fehlen.
    pub fn validated(&self) -> Option<MemberInput> {
        let name = self.name.trim();
        let relation = self.relation.trim();
        if name.is_empty() || relation.is_empty() {
            return None;
        }

        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Some(MemberInput {
            name: name.to_string(),
            relation: relation.to_string(),
            birth_year: non_empty(self.birth_year.trim()),
            notes: non_empty(self.notes.trim()),
        })
    }

    /// Setzt alle Felder zurueck.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
