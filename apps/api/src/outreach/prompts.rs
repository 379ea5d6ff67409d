// Outreach prompt templates.
// Shared writing rules come from llm_client::prompts.

use crate::llm_client::prompts::{MESSAGE_ONLY_INSTRUCTION, OUTREACH_GUIDELINES};
use crate::outreach::models::{OutreachPreferences, TargetProfile};

const NOT_SPECIFIED: &str = "Not specified";

/// Depth phrase for a personalization level; out-of-range levels read "Standard".
pub fn personalization_hint(level: u8) -> &'static str {
    match level {
        1 => "Keep very brief and generic",
        2 => "Basic personalization",
        3 => "Good balance of personal and concise",
        4 => "Deep personalization with multiple references",
        5 => "Highly personalized, detailed, reference their specific achievements",
        _ => "Standard",
    }
}

/// Length instruction for a variant key. Unknown keys get no instruction.
pub fn variant_instructions(variant: &str) -> &'static str {
    match variant {
        "short" => "Output a very short message: 1-2 sentences, concise and direct.",
        "medium" => "Output a medium-length message: 2-4 sentences, balanced personalization.",
        "ultra" => {
            "Output an ultra-personalized message: 3-6 sentences, multiple profile-specific references, gentle CTA."
        }
        _ => "",
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// Renders the full generation prompt for one target and one variant.
pub fn build_prompt(
    background: &str,
    prefs: &OutreachPreferences,
    target: &TargetProfile,
    variant: &str,
) -> String {
    let profile = &target.metadata;

    format!(
        r#"Generate a LinkedIn outreach message based on the context below.

CONTEXT:
Your Background: {background}
Value Proposition: {value_prop}
Problem You Solve: {problem_solving}
Achievements: {achievements}
Interests: {interests}

TARGET:
- Name: {name}
- Role: {role}
- Company: {company}
- Experience Level: {experience}
- Key Skills: {skills}
- Profile Summary: {summary}

OUTREACH PARAMETERS:
- Goal: {goal}
- Tone: {tone}
- Call-to-Action: {cta}
- Personalization Depth: {depth}
- Mention Mutual Connections: {mutual}

{OUTREACH_GUIDELINES}

{instructions}

{MESSAGE_ONLY_INSTRUCTION}"#,
        background = or_default(background, NOT_SPECIFIED),
        value_prop = or_default(&prefs.value_prop, NOT_SPECIFIED),
        problem_solving = or_default(&prefs.problem_solving, NOT_SPECIFIED),
        achievements = or_default(&prefs.achievements, NOT_SPECIFIED),
        interests = or_default(&prefs.interests, NOT_SPECIFIED),
        name = or_default(&profile.name, "Professional"),
        role = or_default(&profile.current_role, "Unknown"),
        company = or_default(&profile.company, "Unknown"),
        experience = profile.experience_level,
        skills = profile.key_skills.join(", "),
        summary = target.snippet,
        goal = prefs.relationship_goal,
        tone = prefs.tone,
        cta = prefs.cta_type,
        depth = personalization_hint(prefs.personalization_level),
        mutual = if prefs.mention_mutual { "Yes" } else { "No" },
        instructions = variant_instructions(variant),
    )
}
