use crate::models::Registrant;
use crate::normalize::normalize_name;

/// Most results a lookup returns.
pub const MAX_RESULTS: usize = 30;
/// Normalized queries shorter than this return nothing instead of everyone.
pub const MIN_QUERY_CHARS: usize = 2;

/// Case- and accent-insensitive roster lookup by name fragment. Support
/// staff sort after participants so the people to be seated surface first;
/// within each group results come back in normalized-name order.
pub fn search<'a>(roster: &'a [Registrant], query: &str) -> Vec<&'a Registrant> {
    let needle = normalize_name(query);
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut matches: Vec<&Registrant> = roster
        .iter()
        .filter(|record| record.normalized_name.contains(&needle))
        .collect();
    matches.sort_by(|a, b| {
        (a.is_support(), &a.normalized_name).cmp(&(b.is_support(), &b.normalized_name))
    });
    matches.truncate(MAX_RESULTS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistrantKind;

    fn roster() -> Vec<Registrant> {
        vec![
            Registrant::from_name("João da Silva", "1", RegistrantKind::Participant),
            Registrant::from_name("Maria João Prado", "2", RegistrantKind::Participant),
            Registrant::from_name("JOÃO Álvares", "3", RegistrantKind::Support),
            Registrant::from_name("Pedro Costa", "4", RegistrantKind::Participant),
        ]
    }

    fn ids(results: &[&Registrant]) -> Vec<String> {
        results.iter().map(|record| record.id.clone()).collect()
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let roster = roster();
        assert!(search(&roster, "").is_empty());
        assert!(search(&roster, "j").is_empty());
        assert!(search(&roster, "  é  ").is_empty());
    }

    #[test]
    fn test_matching_ignores_case_and_accents() {
        let roster = roster();
        assert_eq!(ids(&search(&roster, "JOAO")), vec!["1", "2", "3"]);
        assert_eq!(ids(&search(&roster, "joão")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_matches_fragments_anywhere_in_the_name() {
        let roster = roster();
        assert_eq!(ids(&search(&roster, "cost")), vec!["4"]);
        assert_eq!(ids(&search(&roster, "a silva")), vec!["1"]);
    }

    #[test]
    fn test_support_sorts_after_participants() {
        let roster = roster();
        let results = search(&roster, "joao");
        assert!(results[0].is_participant());
        assert!(results[1].is_participant());
        assert!(results[2].is_support());
    }

    #[test]
    fn test_results_are_capped() {
        let roster: Vec<Registrant> = (0..MAX_RESULTS + 5)
            .map(|i| {
                Registrant::from_name(
                    format!("Aluno Teste {}", i),
                    i.to_string(),
                    RegistrantKind::Participant,
                )
            })
            .collect();
        assert_eq!(search(&roster, "aluno").len(), MAX_RESULTS);
    }

    #[test]
    fn test_no_match_is_an_empty_list() {
        let roster = roster();
        assert!(search(&roster, "zz").is_empty());
    }
}
