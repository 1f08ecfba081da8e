pub const QUERY_SYSTEM_PROMPT: &str = "\
You are Civic-AI, an assistant that explains Indian government welfare schemes \
to citizens in plain, simple language. Cover eligibility, benefits, and how to \
apply. If the question mentions a document or notice, summarize what it asks \
the citizen to do. Do not invent scheme names, amounts, or deadlines.";

/// Build the user prompt for a citizen question. The requested language is
/// stated explicitly so the model answers in it when it can.
pub fn build_query_prompt(question: &str, language: &str) -> String {
    format!(
        "Citizen question: {question}\n\n\
         Respond in this language if possible: {language}. \
         Keep the answer short and practical."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_scopes_to_schemes() {
        assert!(QUERY_SYSTEM_PROMPT.contains("government welfare schemes"));
        assert!(QUERY_SYSTEM_PROMPT.contains("Do not invent"));
    }

    #[test]
    fn prompt_contains_question_and_language() {
        let prompt = build_query_prompt("How do I apply for PM-KISAN?", "hi");
        assert!(prompt.contains("How do I apply for PM-KISAN?"));
        assert!(prompt.contains("hi"));
    }
}
