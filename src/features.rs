use indexmap::IndexMap;
use std::hash::Hash;

/// Feature name to feature value. Iteration follows insertion order.
pub type Features<F> = IndexMap<F, f64>;

/// Turns a `(state, action)` pair into features. Must return the same
/// mapping for the same inputs for the lifetime of the agent using it.
pub trait FeatureExtractor<S, A, F> {
    fn get_features(&self, state: &S, action: &A) -> Features<F>;
}

impl<S, A, F, T> FeatureExtractor<S, A, F> for T
where
    T: Fn(&S, &A) -> Features<F>,
{
    fn get_features(&self, state: &S, action: &A) -> Features<F> {
        self(state, action)
    }
}

/// A single indicator feature per `(state, action)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<S, A> FeatureExtractor<S, A, (S, A)> for IdentityExtractor
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
{
    fn get_features(&self, state: &S, action: &A) -> Features<(S, A)> {
        let mut features = Features::new();
        features.insert((state.clone(), action.clone()), 1.0);
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_one_indicator() {
        let features = IdentityExtractor.get_features(&3_u8, &'n');
        assert_eq!(features.len(), 1);
        assert_eq!(features[&(3_u8, 'n')], 1.0);
    }

    #[test]
    fn closures_are_extractors() {
        let extractor = |state: &i32, action: &i32| {
            let mut features = Features::new();
            features.insert("bias", 1.0);
            features.insert("sum", (state + action) as f64);
            features
        };
        let features = extractor.get_features(&2, &5);
        assert_eq!(features.get_index(1), Some((&"sum", &7.0)));
    }
}
