use crate::error::{Result, SymregError};
use crate::types::TiePolicy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Two disjoint halves of a random permutation of `0..population_size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
}

/// Shuffle all indices and split them down the middle.
///
/// Odd or empty populations are rejected rather than dropping an individual.
pub fn random_pairing<R: Rng>(population_size: usize, rng: &mut R) -> Result<Pairing> {
    if population_size == 0 || population_size % 2 != 0 {
        return Err(SymregError::Configuration(format!(
            "Tournament selection needs a positive even population, got {}",
            population_size
        )));
    }
    let mut indices: Vec<usize> = (0..population_size).collect();
    indices.shuffle(rng);
    let second = indices.split_off(population_size / 2);
    Ok(Pairing {
        first: indices,
        second,
    })
}

/// True when the first contestant beats the second.
///
/// Strictly lower score wins. NaN loses to any number. Equal scores, and two
/// NaNs, go by `tie_policy`.
pub fn first_wins(first: f64, second: f64, tie_policy: TiePolicy) -> bool {
    match (first.is_nan(), second.is_nan()) {
        (false, true) => true,
        (true, false) => false,
        (true, true) => tie_policy == TiePolicy::FirstWins,
        (false, false) => {
            if first == second {
                tie_policy == TiePolicy::FirstWins
            } else {
                first < second
            }
        }
    }
}

/// Winning index of each `first[i]` vs `second[i]` tournament
pub fn tournament_winners(scores: &[f64], pairing: &Pairing, tie_policy: TiePolicy) -> Vec<usize> {
    pairing
        .first
        .iter()
        .zip(&pairing.second)
        .map(|(&a, &b)| {
            if first_wins(scores[a], scores[b], tie_policy) {
                a
            } else {
                b
            }
        })
        .collect()
}

/// One round of pairwise tournaments over the whole population.
///
/// Returns `population.len() / 2` borrowed winners. There is no elitism: the
/// best individual only survives by winning its own tournament.
pub fn tournament_selection<'a, I, R: Rng>(
    population: &'a [I],
    scores: &[f64],
    tie_policy: TiePolicy,
    rng: &mut R,
) -> Result<Vec<&'a I>> {
    if scores.len() != population.len() {
        return Err(SymregError::Configuration(format!(
            "Score vector has {} entries for {} individuals",
            scores.len(),
            population.len()
        )));
    }
    let pairing = random_pairing(population.len(), rng)?;
    Ok(tournament_winners(scores, &pairing, tie_policy)
        .into_iter()
        .map(|i| &population[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pairing_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in [2usize, 4, 10, 100] {
            let pairing = random_pairing(size, &mut rng).unwrap();
            assert_eq!(pairing.first.len(), size / 2);
            assert_eq!(pairing.second.len(), size / 2);

            let mut all: Vec<usize> = pairing.first.iter().chain(&pairing.second).copied().collect();
            all.sort_unstable();
            assert_eq!(all, (0..size).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_pairing_changes_between_calls() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = random_pairing(50, &mut rng).unwrap();
        let b = random_pairing(50, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_odd_and_empty_populations_fail_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(random_pairing(5, &mut rng), Err(SymregError::Configuration(_))));
        assert!(random_pairing(0, &mut rng).is_err());
    }

    #[test]
    fn test_lower_score_wins() {
        assert!(first_wins(0.5, 1.0, TiePolicy::SecondWins));
        assert!(!first_wins(1.0, 0.5, TiePolicy::FirstWins));
        assert!(first_wins(1e9, f64::INFINITY, TiePolicy::SecondWins));
    }

    #[test]
    fn test_tie_policy() {
        assert!(!first_wins(1.0, 1.0, TiePolicy::SecondWins));
        assert!(first_wins(1.0, 1.0, TiePolicy::FirstWins));
        assert!(!first_wins(f64::INFINITY, f64::INFINITY, TiePolicy::SecondWins));
    }

    #[test]
    fn test_nan_always_loses() {
        for policy in [TiePolicy::SecondWins, TiePolicy::FirstWins] {
            assert!(first_wins(f64::INFINITY, f64::NAN, policy));
            assert!(!first_wins(f64::NAN, f64::INFINITY, policy));
            assert!(first_wins(3.0, f64::NAN, policy));
        }
        assert!(!first_wins(f64::NAN, f64::NAN, TiePolicy::SecondWins));
    }

    #[test]
    fn test_winners_are_the_lower_of_each_pair() {
        let scores = vec![4.0, 1.0, 3.0, 2.0, f64::NAN, 0.5];
        let pairing = Pairing {
            first: vec![0, 2, 4],
            second: vec![1, 3, 5],
        };
        assert_eq!(tournament_winners(&scores, &pairing, TiePolicy::SecondWins), vec![1, 3, 5]);
    }

    #[test]
    fn test_selection_returns_half_and_keeps_best() {
        let population: Vec<u32> = (0..20).collect();
        let scores: Vec<f64> = population.iter().map(|&i| i as f64).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let winners = tournament_selection(&population, &scores, TiePolicy::SecondWins, &mut rng).unwrap();
        assert_eq!(winners.len(), 10);
        // the global best cannot lose a tournament, the global worst cannot win one
        assert!(winners.contains(&&0));
        assert!(!winners.contains(&&19));
    }

    #[test]
    fn test_mismatched_scores_rejected() {
        let population = vec![1, 2, 3, 4];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(tournament_selection(&population, &[1.0, 2.0], TiePolicy::SecondWins, &mut rng).is_err());
    }
}
