//! Stakeholder persona types for Stakesim.
//!
//! The persona describes the simulated stakeholder's identity, goals,
//! expertise, and communication style. It is loaded once per process from
//! a JSON file and injected into the system prompt on every turn. The
//! core treats its fields as opaque structured text.

use serde::{Deserialize, Serialize};

/// How well-versed the stakeholder is in business and technology matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertiseLevel {
    pub business: String,
    pub technology: String,
}

/// Whether the persona wanders off topic and how easily it can be refocused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityFocus {
    pub can_tangent: bool,
    pub refocus_easily: bool,
}

/// Tone, professionalism, and focus traits that shape replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    pub tone: Vec<String>,
    pub professionalism: String,
    pub focus: PersonalityFocus,
}

/// Hard constraints on how the persona communicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationRules {
    pub avoid: Vec<String>,
}

/// The simulated project stakeholder.
///
/// Evident in every generated reply; swapping the persona file swaps the
/// stakeholder the trainee talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub role: String,
    pub location: String,
    pub background: Vec<String>,
    pub goals: Vec<String>,
    pub expertise_level: ExpertiseLevel,
    pub personality: Personality,
    pub communication_rules: CommunicationRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const SAMPLE_PERSONA: &str = r#"{
        "name": "Margaret Okafor",
        "role": "Owner of a bicycle shop",
        "location": "Leeds",
        "background": [
            "Runs the shop since 2009",
            "No formal IT training"
        ],
        "goals": [
            "Sell more bikes online",
            "Keep the in-store experience personal"
        ],
        "expertise_level": {
            "business": "high",
            "technology": "low"
        },
        "personality": {
            "tone": ["friendly", "chatty"],
            "professionalism": "informal",
            "focus": {
                "can_tangent": true,
                "refocus_easily": true
            }
        },
        "communication_rules": {
            "avoid": ["technical jargon", "acronyms"]
        }
    }"#;

    #[test]
    fn test_persona_from_json() {
        let persona: Persona = serde_json::from_str(SAMPLE_PERSONA).unwrap();
        assert_eq!(persona.name, "Margaret Okafor");
        assert_eq!(persona.background.len(), 2);
        assert_eq!(persona.expertise_level.technology, "low");
        assert!(persona.personality.focus.can_tangent);
        assert_eq!(persona.communication_rules.avoid[0], "technical jargon");
    }

    #[test]
    fn test_persona_ignores_unknown_fields() {
        // Persona files in the wild carry extra annotation fields; they
        // must not break deserialization.
        let json = SAMPLE_PERSONA.replacen('{', r#"{ "notes": "internal", "#, 1);
        let persona: Persona = serde_json::from_str(&json).unwrap();
        assert_eq!(persona.role, "Owner of a bicycle shop");
    }
}
