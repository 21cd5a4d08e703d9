use juniper::graphql_object;
use rand::Rng;

/// A die with a configurable number of sides.
///
/// Request-scoped: a fresh value is constructed for every `getDie` query and
/// discarded when the request completes.
pub struct RandomDie {
    pub num_sides: i32,
}

impl RandomDie {
    /// Build a die, treating non-positive side counts as unspecified (six
    /// sides).
    pub fn new(num_sides: i32) -> Self {
        let num_sides = if num_sides < 1 { 6 } else { num_sides };
        Self { num_sides }
    }

    fn sample(&self) -> i32 {
        rand::thread_rng().gen_range(1..=self.num_sides)
    }
}

#[graphql_object]
impl RandomDie {
    /// Number of sides on this die
    fn num_sides(&self) -> i32 {
        self.num_sides
    }

    /// A single uniform roll in `[1, numSides]`
    fn roll_once(&self) -> i32 {
        self.sample()
    }

    /// Roll the die `numRolls` times
    fn roll(&self, num_rolls: i32) -> Vec<i32> {
        (0..num_rolls).map(|_| self.sample()).collect()
    }
}
