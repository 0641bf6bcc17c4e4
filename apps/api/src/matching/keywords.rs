//! Keyword coverage: how much of the job's salient wording the resume echoes.

/// Fraction of the job text's salient keywords found in the resume text.
///
/// Keywords are the whitespace-split tokens of the lowercased job text with
/// more than 3 characters, kept verbatim and WITHOUT de-duplication, so a
/// requirement the posting repeats weighs more than one it mentions once.
/// Each keyword counts as covered when it appears as a substring of the
/// lowercased resume text. Zero extracted keywords yields 0.0.
pub fn keyword_coverage(resume_text: &str, job_text: &str) -> f64 {
    let job_lower = job_text.to_lowercase();
    let keywords: Vec<&str> = job_lower
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .collect();

    if keywords.is_empty() {
        return 0.0;
    }

    let resume_lower = resume_text.to_lowercase();
    let matches = keywords
        .iter()
        .filter(|keyword| resume_lower.contains(**keyword))
        .count();

    matches as f64 / keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_coverage_scores_one() {
        let score = keyword_coverage("python react mongodb", "python react mongodb");
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_partial_coverage_is_a_fraction() {
        // keywords: "python", "react", "terraform"; resume covers two
        let score = keyword_coverage("python and react", "python react terraform");
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_duplicate_keywords_count_each_time() {
        // "python" twice, "kafka" once; only python is covered: 2 of 3
        let score = keyword_coverage("python shop", "python python kafka");
        assert!((score - 2.0 / 3.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_short_words_are_not_keywords() {
        // every job token has <= 3 characters, so nothing is extracted
        assert_eq!(keyword_coverage("a full resume text", "we are an it org"), 0.0);
    }

    #[test]
    fn test_empty_job_text_scores_zero() {
        assert_eq!(keyword_coverage("some resume", ""), 0.0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let score = keyword_coverage("PYTHON services", "Python");
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_punctuation_stays_attached_to_keywords() {
        // the extracted keyword is "python," including the comma
        assert_eq!(keyword_coverage("python developer", "python, now"), 0.0);
        let score = keyword_coverage("python, developer", "python, now");
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }
}
