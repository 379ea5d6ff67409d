// Shared prompt fragments for plain-text generation.
// Feature-specific templates live next to the feature (see outreach::prompts).

/// Closing line appended to every message prompt.
pub const MESSAGE_ONLY_INSTRUCTION: &str = "Respond with ONLY the message text.";

/// Preamble local models tend to emit despite being told not to.
pub const KNOWN_PREAMBLE: &str = "Here is the generated LinkedIn outreach message:";

/// Writing rules included in every outreach prompt.
pub const OUTREACH_GUIDELINES: &str = "\
GUIDELINES:
- Write a concise, professional LinkedIn message (2-4 sentences max).
- Reference something SPECIFIC from the profile or their role.
- Lead with value/relevance, NOT with what you want.
- Include a clear but soft CTA at the end (e.g., \"Would love to connect\" or \"Let's chat sometime\").
- Match the requested tone and personalization depth.
- Output ONLY the message itself, no preamble, meta-text, or explanations.
- Do NOT include phrases like \"Here's a message\", \"Let me know if...\", or meta commentary.
- Make it ready to copy-paste directly into LinkedIn DMs without editing.
- Be authentic and conversational, not robotic.";
