//! Persona and city context sent ahead of every question

pub const PERSONA_PROMPT: &str = "You are a friendly Bengaluru local who has lived in the city for years.\n\
Talk like a local: warm, practical, a little dramatic about traffic, and honest.\n\
Use words like \"guru\", \"anna\" and \"adjust maadi\" naturally, never forced.\n\
Always give concrete timings, routes and alternatives instead of generic advice.\n\
If something is a bad idea, say so plainly and suggest a better plan.\n\
Keep answers short enough to read on a phone.";

pub const CITY_CONTEXT: &str = "Traffic:\n\
- Peak hours are 8:30-11 AM and 5:30-9 PM; Google estimates are optimistic by 30-100% at peak.\n\
- Silk Board junction, Marathahalli and the Outer Ring Road (ORR) are the worst chokepoints.\n\
- Even light rain adds 30+ minutes to most trips; low-lying areas like Silk Board flood.\n\
Transport:\n\
- Namma Metro Purple Line runs east-west (Whitefield to Challaghatta), Green Line north-south.\n\
- Autos often refuse the meter (\"meter illa\"); night rides come with a night charge.\n\
- Ola/Uber surge and cancel during rain and peak hours.\n\
- Airport (KIAL) is 1-2 hours from the city centre; Vayu Vajra buses are cheap but slow.\n\
Food:\n\
- Darshinis serve fast, cheap idli, dosa and vada; busy stalls with queues are the safe bet.\n\
- VV Puram food street is the go-to for evening street food.\n\
Neighbourhoods:\n\
- Koramangala and Indiranagar: startups, pubs and restaurants; Toit in Indiranagar is packed on weekends.\n\
- Whitefield and Electronic City: IT hubs, brutal commutes from the city centre.";

/// One question as the dispatcher sees it, built fresh per query.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub persona_instructions: String,
    pub domain_context: String,
    pub user_question: String,
}

impl PromptRequest {
    pub fn for_question(question: &str) -> Self {
        Self {
            persona_instructions: PERSONA_PROMPT.to_string(),
            domain_context: CITY_CONTEXT.to_string(),
            user_question: question.to_string(),
        }
    }

    pub fn compose(&self) -> String {
        compose(
            &self.persona_instructions,
            &self.domain_context,
            &self.user_question,
        )
    }
}

/// Joins persona, context and question into the single text sent to a backend.
pub fn compose(persona_instructions: &str, domain_context: &str, user_question: &str) -> String {
    format!(
        "{}\n\nBENGALURU CONTEXT:\n{}\n\nUSER QUESTION: {}\n\nRespond as a Bengaluru local would, using the context above.",
        persona_instructions, domain_context, user_question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_order(text: &str, parts: &[&str]) {
        let mut cursor = 0;
        for part in parts {
            let found = text[cursor..]
                .find(part)
                .unwrap_or_else(|| panic!("{:?} missing after byte {}", part, cursor));
            cursor += found + part.len();
        }
    }

    #[test]
    fn compose_keeps_inputs_in_order() {
        let cases = [
            ("persona", "context", "question"),
            ("Be kind.", "Silk Board floods.", "ORR timing"),
            ("x", "x", "x"),
            ("ಬೆಂಗಳೂರು", "🌧️ rain", "  padded  "),
        ];
        for (p, c, q) in cases {
            let prompt = compose(p, c, q);
            assert_in_order(&prompt, &[p, c, q]);
        }
    }

    #[test]
    fn compose_has_labeled_sections_and_closing_line() {
        let prompt = compose("P", "C", "Q");
        assert!(prompt.starts_with("P\n\nBENGALURU CONTEXT:\nC"));
        assert!(prompt.contains("USER QUESTION: Q"));
        assert!(prompt.ends_with("Respond as a Bengaluru local would, using the context above."));
    }

    #[test]
    fn prompt_request_uses_static_persona_and_context() {
        let prompt = PromptRequest::for_question("airport at 6 AM?").compose();
        assert_in_order(&prompt, &[PERSONA_PROMPT, CITY_CONTEXT, "airport at 6 AM?"]);
    }
}
