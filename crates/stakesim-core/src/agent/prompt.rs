//! System prompt assembly for the stakeholder agent.
//!
//! Builds the system prompt from persona + project with XML-tagged
//! sections so the model can distinguish identity, scenario, and
//! behavioral instructions, and maps compacted history onto wire
//! messages for the completion request.

use stakesim_types::llm::{MessageRole, PromptMessage};
use stakesim_types::message::Message;
use stakesim_types::persona::Persona;
use stakesim_types::project::Project;
use stakesim_types::turn::CompactedTurn;

/// Builds the stakeholder system prompt.
///
/// Layout:
/// ```text
/// <persona>You are {name}, a {role} ... goals, expertise, traits ...</persona>
/// <project>{name}, {summary}, requirement list</project>
/// <instructions>stay in character, communication rules</instructions>
/// ```
pub struct SystemPromptBuilder;

impl SystemPromptBuilder {
    /// Build the complete system prompt from persona and project.
    pub fn build(persona: &Persona, project: &Project) -> String {
        let mut sections = Vec::with_capacity(3);

        sections.push(format!(
            "<persona>\n\
            You are {name}, a {role} based in {location}.\n\
            Background:\n{background}\n\
            Goals:\n{goals}\n\
            Expertise: business {business}, technology {technology}.\n\
            Tone: {tone}. Professionalism: {professionalism}.\n\
            You {tangent} go off on tangents and are {refocus} to bring back on topic.\n\
            </persona>",
            name = persona.name,
            role = persona.role,
            location = persona.location,
            background = bullet_list(&persona.background),
            goals = bullet_list(&persona.goals),
            business = persona.expertise_level.business,
            technology = persona.expertise_level.technology,
            tone = persona.personality.tone.join(", "),
            professionalism = persona.personality.professionalism,
            tangent = if persona.personality.focus.can_tangent {
                "sometimes"
            } else {
                "never"
            },
            refocus = if persona.personality.focus.refocus_easily {
                "easy"
            } else {
                "hard"
            },
        ));

        let requirements: Vec<String> = project
            .requirements
            .iter()
            .map(|r| format!("- [{}] {}", r.category, r.requirement))
            .collect();
        sections.push(format!(
            "<project>\n\
            You are discussing the project: {name}\n\
            Project summary: {summary}\n\
            Requirements you have in mind (reveal them naturally when asked, \
            never as a checklist):\n{requirements}\n\
            </project>",
            name = project.project_name,
            summary = project.business_summary,
            requirements = requirements.join("\n"),
        ));

        sections.push(format!(
            "<instructions>\n\
            Respond naturally as this stakeholder would, considering the \
            conversation history. Always stay in character.\n\
            Avoid: {avoid}.\n\
            </instructions>",
            avoid = persona.communication_rules.avoid.join(", "),
        ));

        sections.join("\n\n")
    }
}

/// Map a compacted history onto wire messages for a completion request.
///
/// Verbatim turns map 1:1. A summary turn becomes an assistant message
/// framed as a recap of the earlier conversation.
pub fn wire_history(history: &[CompactedTurn]) -> Vec<PromptMessage> {
    history
        .iter()
        .map(|turn| match turn {
            CompactedTurn::Verbatim { role, content } => PromptMessage {
                role: *role,
                content: content.clone(),
            },
            CompactedTurn::Summary { content } => PromptMessage {
                role: MessageRole::Assistant,
                content: format!("[Summary of the conversation so far] {content}"),
            },
        })
        .collect()
}

/// Render messages as a plain transcript, one `role: content` line per
/// turn, for the summarization call.
pub fn transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
