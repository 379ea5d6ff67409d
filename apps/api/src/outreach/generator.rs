//! Outreach Generation: produces the short / medium / ultra message set for one target.
//!
//! Flow per variant: build_prompt → generator.generate → clean text.
//! Any failure or blank output is replaced by a local template for that
//! variant, so callers always receive all three messages.

use tracing::{debug, warn};

use crate::llm_client::prompts::KNOWN_PREAMBLE;
use crate::llm_client::TextGenerator;
use crate::outreach::models::{MessageVariant, OutreachPreferences, OutreachVariants, TargetProfile};
use crate::outreach::prompts::build_prompt;

/// Number of skills the ultra fallback mentions.
const FALLBACK_SKILL_COUNT: usize = 3;

/// Generates all three variants. Never fails; see `fallback_message`.
pub async fn generate_outreach_variants(
    generator: &dyn TextGenerator,
    background: &str,
    target: &TargetProfile,
    prefs: &OutreachPreferences,
) -> OutreachVariants {
    let short = generate_variant(generator, MessageVariant::Short, background, target, prefs).await;
    let medium = generate_variant(generator, MessageVariant::Medium, background, target, prefs).await;
    let ultra = generate_variant(generator, MessageVariant::Ultra, background, target, prefs).await;

    OutreachVariants {
        short,
        medium,
        ultra,
    }
}

/// Generates the full variant set and keeps only the ready-to-send message.
pub async fn generate_outreach_message(
    generator: &dyn TextGenerator,
    background: &str,
    target: &TargetProfile,
    prefs: &OutreachPreferences,
) -> String {
    let variants = generate_outreach_variants(generator, background, target, prefs).await;
    primary_message(&variants).to_string()
}

/// The variant offered as the default message: medium.
pub fn primary_message(variants: &OutreachVariants) -> &str {
    variants.get(MessageVariant::Medium)
}

async fn generate_variant(
    generator: &dyn TextGenerator,
    variant: MessageVariant,
    background: &str,
    target: &TargetProfile,
    prefs: &OutreachPreferences,
) -> String {
    let prompt = build_prompt(background, prefs, target, variant.as_str());

    match generator.generate(&prompt).await {
        Ok(text) => match clean_generated_text(&text) {
            Some(message) => {
                debug!("Generated {} variant for '{}'", variant.as_str(), target.metadata.name);
                message
            }
            None => {
                warn!(
                    "Empty {} variant for '{}', using local template",
                    variant.as_str(),
                    target.metadata.name
                );
                fallback_message(variant, target, prefs)
            }
        },
        Err(e) => {
            warn!(
                "Generation failed for {} variant ({e}), using local template",
                variant.as_str()
            );
            fallback_message(variant, target, prefs)
        }
    }
}

/// Trims model output and drops a known preamble. `None` means nothing usable.
fn clean_generated_text(text: &str) -> Option<String> {
    let text = text.trim();
    let text = match text.split_once(KNOWN_PREAMBLE) {
        Some((_, rest)) => rest.trim(),
        None => text,
    };
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Deterministic local message used when the generator gives nothing usable.
pub fn fallback_message(
    variant: MessageVariant,
    target: &TargetProfile,
    prefs: &OutreachPreferences,
) -> String {
    let profile = &target.metadata;
    let name = if profile.name.is_empty() {
        "there"
    } else {
        profile.name.as_str()
    };
    let role = &profile.current_role;
    let value_prop = &prefs.value_prop;
    let cta = prefs.cta_type.to_lowercase();

    match variant {
        MessageVariant::Short => format!(
            "Hi {name},\n\nI liked your work as {role}. {value_prop} Would you be open to a quick {cta}?\n\nThanks!"
        ),
        MessageVariant::Medium => format!(
            "Hi {name},\n\nI noticed your work as {role} at {company}. {value_prop} I'd love to {cta} to learn about your experience and share a quick idea.\n\nBest,\n[Your Name]",
            company = profile.company,
        ),
        MessageVariant::Ultra => {
            let skills = profile
                .key_skills
                .iter()
                .take(FALLBACK_SKILL_COUNT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Hi {name},\n\nYour leadership as {role} stood out to me, especially your experience with {skills}. {value_prop} Would you be open to a brief {cta} to explore fit?\n\nThanks,\n[Your Name]"
            )
        }
    }
}
