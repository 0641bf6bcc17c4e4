//! Fixed-vocabulary skill extraction and overlap scoring.

use std::collections::HashSet;

/// Technology and process terms recognized as skills.
///
/// Matching is substring containment, so a term like "java" also matches
/// inside "javascript". That imprecision is accepted and covered by tests;
/// word-boundary checks are intentionally not applied.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node",
    "nodejs",
    "express",
    "django",
    "flask",
    "fastapi",
    "mongodb",
    "sql",
    "mysql",
    "postgresql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "deep learning",
    "nlp",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "html",
    "css",
    "typescript",
    "c++",
    "c#",
    "ruby",
    "php",
    "go",
    "rust",
    "swift",
    "kotlin",
    "redux",
    "bootstrap",
    "tailwind",
    "sass",
    "webpack",
    "api",
    "rest",
    "graphql",
    "agile",
    "scrum",
    "ci/cd",
    "devops",
    "linux",
    "bash",
    "junit",
    "jest",
];

/// Returns the subset of the vocabulary present in `text`, case-insensitively.
pub fn extract_skills(text: &str) -> HashSet<&'static str> {
    let lowered = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| lowered.contains(skill))
        .collect()
}

/// Fraction of the job's required skills the resume demonstrates.
///
/// Asymmetric: extra resume skills never inflate the score. An empty job
/// skill set yields 0.0 rather than a division error.
pub fn skill_overlap(resume_text: &str, job_text: &str) -> f64 {
    let resume_skills = extract_skills(resume_text);
    let job_skills = extract_skills(job_text);

    if job_skills.is_empty() {
        return 0.0;
    }

    let matching = resume_skills.intersection(&job_skills).count();
    matching as f64 / job_skills.len() as f64
}
