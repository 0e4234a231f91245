use rand::Rng;

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

// Scanned top to bottom; the first rule with any matching keyword wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["sad", "depressed"],
        reply: "I understand you're feeling sad. These feelings are temporary, even though they feel overwhelming right now. Would you like to try a breathing exercise together?",
    },
    Rule {
        keywords: &["anxious", "worry"],
        reply: "Anxiety can be really challenging. Let's focus on the present moment. Can you name 3 things you can see around you right now?",
    },
    Rule {
        keywords: &["stress"],
        reply: "Stress affects us all. Remember, you've overcome challenges before and you can do it again. What's one small thing you could do today to take care of yourself?",
    },
    Rule {
        keywords: &["help"],
        reply: "I'm glad you're reaching out for help - that shows real strength. I'm here to support you, and if you need professional help, I can provide some resources too.",
    },
];

pub const FALLBACK_REPLIES: [&str; 6] = [
    "I hear you, and your feelings are completely valid. It's okay to feel this way.",
    "Thank you for sharing with me. What you're experiencing sounds difficult.",
    "I'm here to listen and support you. Would you like to talk about what's been on your mind?",
    "It takes courage to reach out. I'm proud of you for taking this step.",
    "Your mental health matters. Let's work through this together, one step at a time.",
    "Remember, it's okay to not be okay sometimes. Healing isn't linear.",
];

pub const GREETING: &str =
    "Hi there! I'm your AI companion. I'm here to listen and support you. How are you feeling today?";

/// Picks a canned reply for `input`, drawing from `rng` only when no keyword matches.
pub fn reply<R: Rng + ?Sized>(input: &str, rng: &mut R) -> &'static str {
    match keyword_reply(input) {
        Some(reply) => reply,
        None => FALLBACK_REPLIES[rng.gen_range(0..FALLBACK_REPLIES.len())],
    }
}

pub fn keyword_reply(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|rule| rule.reply)
}
