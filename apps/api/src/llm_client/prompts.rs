// Prompt constants for the remote extraction engine.

/// System prompt enforcing JSON-only structured extraction.
pub const EXTRACTION_SYSTEM: &str = "You are a precise resume parser. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Extract only what the document states; never invent names, dates, or employers.";

/// Builds the user prompt for a single extraction call.
pub fn extraction_prompt(resume_text: &str) -> String {
    format!(
        "Extract this resume into JSON with the shape:\n\
        {{\n\
          \"resume\": {{\n\
            \"header\": {{\"name\": \"\", \"email\": \"\", \"phone\": \"\", \"linkedin\": \"\", \"github\": \"\"}},\n\
            \"profile\": \"\",\n\
            \"skills\": [{{\"category\": \"\", \"items\": []}}],\n\
            \"experience\": [{{\"id\": \"\", \"role\": \"\", \"company\": \"\", \"startDate\": \"\", \"endDate\": \"\", \"bullets\": []}}],\n\
            \"education\": [{{\"id\": \"\", \"degree\": \"\", \"institution\": \"\", \"year\": \"\"}}],\n\
            \"projects\": [{{\"id\": \"\", \"name\": \"\", \"description\": \"\", \"tech\": []}}]\n\
          }},\n\
          \"confidence\": 0.0\n\
        }}\n\
        Dates stay as written in the document (e.g. \"03/2021\", \"March 2021\", \"Present\").\n\
        Leave fields the document does not state as empty strings or empty arrays.\n\
        Set confidence to your estimate (0.0-1.0) of extraction completeness.\n\n\
        Resume text:\n{resume_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_embeds_text() {
        let prompt = extraction_prompt("Jane Doe\njane@example.com");
        assert!(prompt.contains("jane@example.com"));
        assert!(prompt.contains("\"startDate\""));
    }
}
