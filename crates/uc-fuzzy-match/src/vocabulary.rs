//! Static technical vocabulary — canonical terms, known misspellings, and
//! follow-up actions.
//!
//! The table is fixed at compile time and iterated in declaration order;
//! when aliases overlap across entries, the first entry wins.

/// One technical concept with its spelling variants.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyEntry {
    /// Legacy lookup key. Distinct from `canonical` and intentionally NOT an
    /// exact alias: it participates only in the similarity pass.
    pub key: &'static str,
    /// Normalized name of the concept.
    pub canonical: &'static str,
    /// Known misspellings and synonyms, lowercase, unique within the entry.
    pub aliases: &'static [&'static str],
    /// Follow-up actions, in recommended order. Never empty.
    pub actions: &'static [&'static str],
}

/// Built-in vocabulary, in pinned declaration order.
pub const BUILTIN_VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry {
        key: "hasguar",
        canonical: "hardware",
        aliases: &["hardware", "hazguar", "hasuar", "hasgwar", "hardwar"],
        actions: &["leer_estado", "verificar_conexion", "diagnosticar_fallo"],
    },
    VocabularyEntry {
        key: "sensor",
        canonical: "sensor",
        aliases: &["senser", "censor", "sensore", "senso"],
        actions: &["leer_datos", "verificar_voltaje", "calibrar"],
    },
    VocabularyEntry {
        key: "valvula",
        canonical: "valvula",
        aliases: &["valvla", "valbula", "balvula", "valve"],
        actions: &["probar_funcionamiento", "verificar_apertura", "limpiar"],
    },
    VocabularyEntry {
        key: "filtro",
        canonical: "filtro",
        aliases: &["filtero", "filtr", "filter"],
        actions: &["verificar_estado", "reemplazar", "limpiar"],
    },
];

impl VocabularyEntry {
    /// All strings the similarity pass compares against: the legacy key,
    /// the canonical term, and every alias.
    pub fn similarity_candidates(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.key)
            .chain(std::iter::once(self.canonical))
            .chain(self.aliases.iter().copied())
    }
}
