use rand::Rng;

pub const MAX_STATE: u8 = 9;

/// Where the subject draws its next state from.
pub trait StateSource {
    fn next_state(&mut self) -> u8;
}

pub struct Random<'a, T>
where
    T: Rng,
{
    rng: &'a mut T,
}

impl<'a, T> Random<'a, T>
where
    T: Rng,
{
    pub fn new(rng: &'a mut T) -> Self {
        Random { rng }
    }
}

impl<'a, T> StateSource for Random<'a, T>
where
    T: Rng,
{
    fn next_state(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_STATE)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    use super::StateSource;

    /// Replays the given states in a loop.
    pub struct ScriptedStates {
        samples: Vec<u8>,
        index: usize,
    }

    impl ScriptedStates {
        pub fn new(samples: Vec<u8>) -> Self {
            ScriptedStates { samples, index: 0 }
        }
    }

    impl StateSource for ScriptedStates {
        fn next_state(&mut self) -> u8 {
            let result = self.samples[self.index];
            self.index = (self.index + 1) % self.samples.len();
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use common_test::get_seeded_rng;

    use super::{Random, StateSource, MAX_STATE};

    #[test]
    fn test_random_next_state_stays_in_range() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let mut source = Random::new(&mut rng);

        // When
        let states = (0..1000).map(|_| source.next_state()).collect::<Vec<_>>();

        // Then
        assert!(
            states.iter().all(|&state| state <= MAX_STATE),
            "Should never exceed the max state"
        );
        let distinct = states.into_iter().collect::<HashSet<_>>();
        assert_eq!(
            usize::from(MAX_STATE) + 1,
            distinct.len(),
            "Should cover every state from 0 to the max state"
        );
    }
}
