//! The static achievement catalog
//!
//! Ids and point values are part of the persisted format; renaming an id
//! would orphan previously unlocked entries in stored profiles.

use super::models::Achievement;
use crate::personas;

pub static CATALOG: &[Achievement] = &[
    Achievement {
        id: "first_chat",
        name: "First Steps",
        description: "Had your first conversation",
        points: 10,
        unlocked: |p, _| p.total_messages >= 1,
    },
    Achievement {
        id: "chat_5",
        name: "Chatty",
        description: "Had 5 conversations",
        points: 25,
        unlocked: |p, _| p.total_messages >= 5,
    },
    Achievement {
        id: "chat_25",
        name: "Conversationalist",
        description: "Had 25 conversations",
        points: 50,
        unlocked: |p, _| p.total_messages >= 25,
    },
    Achievement {
        id: "chat_100",
        name: "Chat Master",
        description: "Had 100 conversations",
        points: 100,
        unlocked: |p, _| p.total_messages >= 100,
    },
    Achievement {
        id: "streak_3",
        name: "On Fire",
        description: "3-day streak",
        points: 30,
        unlocked: |p, _| p.streak_days >= 3,
    },
    Achievement {
        id: "streak_7",
        name: "Dedicated",
        description: "7-day streak",
        points: 75,
        unlocked: |p, _| p.streak_days >= 7,
    },
    Achievement {
        id: "quiz_master",
        name: "Quiz Master",
        description: "Answered 5 quizzes correctly",
        points: 50,
        unlocked: |p, _| p.quiz_score >= 5,
    },
    Achievement {
        id: "night_owl",
        name: "Night Owl",
        description: "Chatted past midnight",
        points: 15,
        unlocked: |_, hour| hour >= 23 || hour < 2,
    },
    Achievement {
        id: "early_bird",
        name: "Early Bird",
        description: "Chatted before 6 AM",
        points: 15,
        unlocked: |_, hour| hour < 6,
    },
    Achievement {
        id: "topic_explorer",
        name: "Explorer",
        description: "Discussed 10+ different topics",
        points: 40,
        unlocked: |p, _| p.topics.len() >= 10,
    },
    Achievement {
        id: "long_conversation",
        name: "Deep Thinker",
        description: "Had a 20+ message conversation",
        points: 35,
        unlocked: |p, _| p.total_messages >= 20,
    },
    Achievement {
        id: "personality_switcher",
        name: "Shapeshifter",
        description: "Tried all personas",
        points: 60,
        unlocked: |p, _| p.personalities_used.len() >= personas::CATALOG.len(),
    },
];

/// Look up a catalog entry by id
pub fn find(id: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_distinct() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find("quiz_master").unwrap().points, 50);
        assert!(find("unknown").is_none());
    }
}
