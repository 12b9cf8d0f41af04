use crate::domain::{Rejection, Submission};

/// Checks the submission's business rules in order, stopping at the first
/// violation. Pure; the store is never involved.
pub fn validate(submission: &Submission) -> Result<(), Rejection> {
    if submission
        .plus_one_attending_ids
        .iter()
        .any(|id| !submission.is_attending(id))
    {
        return Err(Rejection::PlusOneWithoutPrincipal);
    }

    let has_name = submission
        .plus_one_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    if !submission.plus_one_attending_ids.is_empty() && !has_name {
        return Err(Rejection::MissingPlusOneName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn submission(attending: &[&str], plus_ones: &[&str], plus_one_name: Option<&str>) -> Submission {
        Submission {
            guest_ids: ids(&["g1", "g2"]),
            attending_ids: ids(attending),
            plus_one_attending_ids: ids(plus_ones),
            plus_one_name: plus_one_name.map(str::to_string),
            ..Submission::default()
        }
    }

    #[test]
    fn test_accepts_without_plus_ones() {
        assert_eq!(validate(&submission(&["g1"], &[], None)), Ok(()));
        assert_eq!(validate(&submission(&[], &[], None)), Ok(()));
    }

    #[test]
    fn test_accepts_named_plus_one() {
        assert_eq!(validate(&submission(&["g1"], &["g1"], Some("Pat"))), Ok(()));
    }

    #[test]
    fn test_plus_one_needs_principal() {
        assert_eq!(
            validate(&submission(&["g1"], &["g2"], Some("Pat"))),
            Err(Rejection::PlusOneWithoutPrincipal)
        );
    }

    #[test]
    fn test_plus_one_needs_name() {
        assert_eq!(
            validate(&submission(&["g1"], &["g1"], None)),
            Err(Rejection::MissingPlusOneName)
        );
        assert_eq!(
            validate(&submission(&["g1"], &["g1"], Some("  "))),
            Err(Rejection::MissingPlusOneName)
        );
    }

    #[test]
    fn test_principal_rule_checked_first() {
        assert_eq!(
            validate(&submission(&[], &["g1"], None)),
            Err(Rejection::PlusOneWithoutPrincipal)
        );
    }

    #[test]
    fn test_name_without_plus_one_is_fine() {
        assert_eq!(validate(&submission(&["g1"], &[], Some("Pat"))), Ok(()));
    }
}
