//! Health-score arithmetic for the store audit.
//!
//! The total score is the sum of two independently computed halves: a
//! compliance half (legal-policy presence) and an SEO half (meta-description
//! coverage), each worth up to 50 points. The halves are never renormalised
//! against each other; an empty catalog scores 0 on the SEO half rather than
//! dividing by zero.

/// Maximum points the compliance half contributes.
pub const MAX_COMPLIANCE_POINTS: u64 = 50;

/// Maximum points the SEO half contributes.
pub const MAX_SEO_POINTS: u64 = 50;

/// A meta description this short (or absent) does not count as optimized.
pub const MIN_META_DESCRIPTION_LEN: usize = 10;

/// Compliance score: `floor(present / required × 50)`.
///
/// `required` is the number of policy slots audited; 0 required slots score 0.
pub fn compliance_score(present: usize, required: usize) -> u32 {
    if required == 0 {
        return 0;
    }
    (present as u64 * MAX_COMPLIANCE_POINTS / required as u64) as u32
}

/// SEO score: `floor(optimized / checked × 50)`, 0 when nothing was checked.
pub fn seo_score(optimized: u64, checked: u64) -> u32 {
    if checked == 0 {
        return 0;
    }
    (optimized * MAX_SEO_POINTS / checked) as u32
}

/// Whether a product's SEO meta description is set and non-trivial.
pub fn has_usable_meta_description(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.chars().count() > MIN_META_DESCRIPTION_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_all_presence_counts() {
        // floor(n/4 × 50) for n = 0..=4.
        assert_eq!(compliance_score(0, 4), 0);
        assert_eq!(compliance_score(1, 4), 12);
        assert_eq!(compliance_score(2, 4), 25);
        assert_eq!(compliance_score(3, 4), 37);
        assert_eq!(compliance_score(4, 4), 50);
    }

    #[test]
    fn compliance_zero_required_is_zero() {
        assert_eq!(compliance_score(0, 0), 0);
    }

    #[test]
    fn seo_seven_of_ten_is_35() {
        assert_eq!(seo_score(7, 10), 35);
    }

    #[test]
    fn seo_empty_catalog_is_zero() {
        assert_eq!(seo_score(0, 0), 0);
    }

    #[test]
    fn seo_full_coverage_is_50() {
        assert_eq!(seo_score(250, 250), 50);
    }

    #[test]
    fn seo_floors_not_rounds() {
        // 2/3 × 50 = 33.33… → 33
        assert_eq!(seo_score(2, 3), 33);
    }

    #[test]
    fn meta_description_threshold() {
        assert!(!has_usable_meta_description(None));
        assert!(!has_usable_meta_description(Some("")));
        assert!(!has_usable_meta_description(Some("ten chars!"))); // exactly 10
        assert!(has_usable_meta_description(Some("eleven chars")));
    }
}
