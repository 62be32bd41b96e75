use crate::engines::generation::individual::GeneticOperators;
use crate::error::{Result, SymregError};
use rand::Rng;

/// Build `target_size` offspring from the winner pool, then mutate.
///
/// Both parents are drawn uniformly with replacement, so an individual may be
/// paired with itself. Mutation runs after the whole generation is assembled,
/// each child independently with probability `mutation_rate`. Any operator
/// error discards the partially built generation.
pub fn reproduce<G, R>(
    operators: &G,
    winners: &[&G::Individual],
    target_size: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Vec<G::Individual>>
where
    G: GeneticOperators,
    R: Rng,
{
    if winners.is_empty() {
        return Err(SymregError::Configuration(
            "Cannot reproduce from an empty winner pool".to_string(),
        ));
    }

    let mut next_generation = Vec::with_capacity(target_size);
    for _ in 0..target_size {
        let parent_a = winners[rng.gen_range(0..winners.len())];
        let parent_b = winners[rng.gen_range(0..winners.len())];
        next_generation.push(operators.breed(parent_a, parent_b, rng)?);
    }

    for child in next_generation.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *child = operators.mutate(child, rng)?;
        }
    }

    Ok(next_generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::individual::Individual;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag(String);

    impl Individual for Tag {
        fn evaluate(&self, _x: f64, _y: f64) -> Result<f64> {
            Ok(0.0)
        }
        fn render(&self) -> String {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct Recording {
        mutations: Cell<usize>,
        fail_breed: bool,
    }

    impl GeneticOperators for Recording {
        type Individual = Tag;

        fn random_tree<R: Rng>(&self, _max_depth: usize, _rng: &mut R) -> Result<Tag> {
            Ok(Tag("r".to_string()))
        }

        fn breed<R: Rng>(&self, a: &Tag, b: &Tag, _rng: &mut R) -> Result<Tag> {
            if self.fail_breed {
                return Err(SymregError::Capability("breed exploded".to_string()));
            }
            Ok(Tag(format!("{}{}", a.0, b.0)))
        }

        fn mutate<R: Rng>(&self, individual: &Tag, _rng: &mut R) -> Result<Tag> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(Tag(format!("{}'", individual.0)))
        }
    }

    #[test]
    fn test_output_size_and_parents_from_pool() {
        let ops = Recording::default();
        let pool = [Tag("a".to_string()), Tag("b".to_string()), Tag("c".to_string())];
        let winners: Vec<&Tag> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(4);

        let children = reproduce(&ops, &winners, 17, 0.0, &mut rng).unwrap();
        assert_eq!(children.len(), 17);
        for child in &children {
            assert_eq!(child.0.len(), 2);
            assert!(child.0.chars().all(|c| "abc".contains(c)));
        }
    }

    #[test]
    fn test_single_winner_pairs_with_itself() {
        let ops = Recording::default();
        let only = Tag("z".to_string());
        let mut rng = StdRng::seed_from_u64(4);
        let children = reproduce(&ops, &[&only], 2, 0.0, &mut rng).unwrap();
        assert_eq!(children, vec![Tag("zz".to_string()), Tag("zz".to_string())]);
    }

    #[test]
    fn test_mutation_probability_extremes() {
        let pool = [Tag("a".to_string())];
        let winners: Vec<&Tag> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(9);

        let never = Recording::default();
        let children = reproduce(&never, &winners, 50, 0.0, &mut rng).unwrap();
        assert_eq!(never.mutations.get(), 0);
        assert!(children.iter().all(|c| c.0 == "aa"));

        let always = Recording::default();
        let children = reproduce(&always, &winners, 50, 1.0, &mut rng).unwrap();
        assert_eq!(always.mutations.get(), 50);
        assert!(children.iter().all(|c| c.0 == "aa'"));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let ops = Recording::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            reproduce(&ops, &[], 4, 0.2, &mut rng),
            Err(SymregError::Configuration(_))
        ));
    }

    #[test]
    fn test_breed_failure_aborts() {
        let ops = Recording {
            fail_breed: true,
            ..Default::default()
        };
        let pool = [Tag("a".to_string())];
        let winners: Vec<&Tag> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            reproduce(&ops, &winners, 4, 0.2, &mut rng),
            Err(SymregError::Capability(_))
        ));
    }
}
