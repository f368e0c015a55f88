//! Prompt templates for the two interview operations.
//!
//! The markdown structure requested here is advisory: the completion service
//! is not guaranteed to comply, and nothing downstream validates it.

/// System role for live analysis.
pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert UX research assistant helping an interviewer.";

/// System role for summarization.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are an expert summarizer specializing in user interviews.";

/// Build the live-analysis prompt: 1-2 follow-up questions or emerging themes
/// for the interview so far.
pub fn build_analysis_prompt(context: &str, transcript: &str) -> String {
    format!(
        "Analyze the following user interview excerpt. The interview's initial context was:\n\
--- START CONTEXT ---\n\
{context}\n\
--- END CONTEXT ---\n\
\n\
Here is the transcript so far:\n\
--- START TRANSCRIPT ---\n\
{transcript}\n\
--- END TRANSCRIPT ---\n\
\n\
Based *only* on the provided context and transcript, suggest EITHER 1-2 insightful \
follow-up questions the interviewer could ask OR mention 1-2 key themes emerging. \
Focus on the most recent parts of the conversation if relevant.\n\
\n\
Format the output *exactly* like this, using standard markdown list syntax:\n\
Place the first list item immediately on the line below the bold header, with no \
blank line in between.\n\
\n\
**Follow up questions**\n\
* [Question 1]\n\
* [Question 2 (if applicable)]\n\
\n\
**Key themes**\n\
* [Theme 1]\n\
* [Theme 2 (if applicable)]\n\
\n\
Ensure there is a blank line between the end of one list and the start of the next \
header. Only include the sections (questions or themes) that you generate."
    )
}

/// Build the summary prompt: bold-titled key points covering highlights,
/// insights, and main themes of the full transcript.
pub fn build_summary_prompt(context: &str, transcript: &str) -> String {
    format!(
        "Generate a concise bullet-point summary of the key highlights, insights, and \
main themes from the following user interview transcript. Consider the initial \
interview context provided.\n\
\n\
Initial Context:\n\
--- START CONTEXT ---\n\
{context}\n\
--- END CONTEXT ---\n\
\n\
Transcript:\n\
--- START TRANSCRIPT ---\n\
{transcript}\n\
--- END TRANSCRIPT ---\n\
\n\
Format the summary *exactly* as follows for each key point:\n\
1. Output the theme or highlight title formatted as **bold** using markdown.\n\
2. Immediately after the bold title, output a newline character.\n\
3. On the very next line, start the descriptive text for that point.\n\
4. After the description for one point, ensure there is exactly one blank line (a \
double newline) before the bold title of the next point.\n\
5. Do NOT use bullet point characters like '\u{2022}' or '-'.\n\
Example:\n\
**Theme Title 1**\n\
Description for theme 1.\n\
\n\
**Theme Title 2**\n\
Description for theme 2."
    )
}
