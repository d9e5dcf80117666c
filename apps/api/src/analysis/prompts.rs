// Prompt constants for the Match Analyzer.
// Replace `{job_description}` and `{resume_text}` before sending.

/// ATS-scanner prompt. Mandates the exact JSON output shape the strict
/// parser in this module expects; keyword counts are an instruction to the
/// model, not an enforced bound.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) scanner.

1. Extract the Hiring Company Name from the Job Description (if not explicitly stated, infer it or say "Unknown").
2. Extract the Target Country for the role (e.g. "Finland", "USA", "Remote"). If not stated, infer it from the location or language. Default to "International".
3. Extract the top 10 hard skills/keywords from the Job Description.
4. Check which of these keywords exist in the Resume.
5. Calculate a match score (0-100).
6. Provide the list of missing keywords.

Job Description:
{job_description}

Resume:
{resume_text}

Return a JSON object with this EXACT shape (no extra fields, no text outside the object):
{
    "hiring_company_name": "Name or Unknown",
    "target_country": "Country Name",
    "match_score": 75,
    "found_keywords": ["python", "sql"],
    "missing_keywords": ["aws", "docker"],
    "summary": "Good match but missing cloud skills."
}"#;
