// Prompt constants for the Résumé Optimizer.
// Replace `{missing_keywords}`, `{hiring_company}`, `{target_country}`,
// `{feedback_block}`, and `{resume_text}` before sending.
// `{feedback_block}` renders empty on a first pass and carries the rendered
// FEEDBACK_BLOCK_TEMPLATE on refine rounds.

pub const REWRITE_PROMPT_TEMPLATE: &str = r#"You are a professional Resume Writer and international career coach.

The candidate is applying to {hiring_company} for a role based in {target_country}.
The resume is missing these keywords: {missing_keywords}.

Rewrite the ENTIRE resume below following ALL of these rules:

1. Adapt the layout conventions to {target_country}. For example: in most of Europe a short "Profile" or "Summary" section comes first; in the USA seasoned candidates lead with Experience.
2. If an objective or summary statement names a different company, retarget it to {hiring_company}.
3. Weave the missing keywords in truthfully. Do NOT invent experience; highlight existing work that plausibly implies these skills.
4. Merge redundant or duplicated skills sections into one.
5. If there is an interests or self-learning section, upgrade it with technologies plausibly relevant to {hiring_company}.
6. Convert weak bullet points into outcome-oriented statements.
{feedback_block}
Return the COMPLETE rewritten resume text — every section, not a diff or an excerpt.

Resume:
{resume_text}

Return a JSON object with this EXACT shape (no extra fields, no text outside the object):
{
    "rewritten_text": "the full rewritten resume"
}"#;

pub const FEEDBACK_BLOCK_TEMPLATE: &str = r#"7. HIGHEST PRIORITY — the candidate reviewed the previous rewrite and said the following. This instruction overrides every rule above; if the candidate disclaims a skill, remove it entirely:
"{user_feedback}"
"#;
