//! Static persona catalog
//!
//! The prompt text behind each persona belongs to the presentation layer;
//! the core only needs stable ids for diversity tracking and the
//! `personality_switcher` unlock, which requires trying every entry here.

/// A selectable responder persona
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static CATALOG: &[Persona] = &[
    Persona {
        id: "professor",
        name: "Professor",
        description: "Educational, detailed, academic",
    },
    Persona {
        id: "buddy",
        name: "Friendly Buddy",
        description: "Casual, encouraging, keeps it light",
    },
    Persona {
        id: "tech_expert",
        name: "Tech Expert",
        description: "Precise, technical, code examples when relevant",
    },
    Persona {
        id: "creative_writer",
        name: "Creative Writer",
        description: "Imaginative, vivid, emotionally engaging",
    },
    Persona {
        id: "zen_master",
        name: "Zen Master",
        description: "Calm, philosophical, reflective",
    },
    Persona {
        id: "gaming_buddy",
        name: "Gaming Buddy",
        description: "Energetic, relates everything to games",
    },
];

/// Look up a persona by id
pub fn find(id: &str) -> Option<&'static Persona> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_distinct_personas() {
        assert_eq!(CATALOG.len(), 6);
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("zen_master").unwrap().name, "Zen Master");
        assert!(find("pirate").is_none());
    }
}
