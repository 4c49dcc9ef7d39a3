/// A name prefix that multiplies an enemy's scaled stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub name: &'static str,
    /// hp, atk, def, xp, gold
    pub multipliers: [f64; 5],
    pub weight: u32,
}

const fn prefix(name: &'static str, multipliers: [f64; 5], weight: u32) -> Prefix {
    Prefix {
        name,
        multipliers,
        weight,
    }
}

pub const NO_PREFIX_MULTIPLIERS: [f64; 5] = [1.0; 5];

pub const WEAKENED_PREFIXES: [Prefix; 3] = [
    prefix("Wounded", [0.5, 0.6, 0.7, 0.5, 0.5], 33),
    prefix("Malnourished", [0.6, 0.5, 0.5, 0.5, 0.5], 33),
    prefix("Hesitant", [0.7, 0.7, 0.8, 0.6, 0.6], 34),
];

pub const WEAK_PREFIXES: [Prefix; 3] = [
    prefix("Small", [0.7, 0.8, 0.9, 0.7, 0.7], 40),
    prefix("Young", [0.8, 0.9, 0.9, 0.8, 0.8], 40),
    prefix("Hatchling", [0.6, 0.7, 0.7, 0.6, 0.6], 20),
];

pub const MEDIUM_PREFIXES: [Prefix; 5] = [
    prefix("Greater", [1.2, 1.1, 1.0, 1.2, 1.1], 25),
    prefix("Swift", [0.9, 1.2, 1.1, 1.1, 1.0], 25),
    prefix("Bestial", [1.1, 1.0, 1.3, 1.2, 1.1], 20),
    prefix("Shadow", [1.0, 1.2, 1.2, 1.3, 1.2], 20),
    prefix("Brute", [0.8, 1.1, 1.3, 1.3, 1.3], 10),
];

pub const STRONG_PREFIXES: [Prefix; 4] = [
    prefix("Insane", [0.9, 1.2, 1.0, 1.2, 1.1], 40),
    prefix("Giant", [1.5, 1.2, 1.1, 1.4, 1.3], 30),
    prefix("Ancient", [1.3, 1.25, 0.9, 1.3, 1.2], 25),
    prefix("Titanic", [1.8, 1.35, 1.2, 1.5, 1.5], 5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weakened_prefixes_never_buff() {
        for p in WEAKENED_PREFIXES {
            assert!(p.multipliers.iter().all(|m| *m < 1.0), "{}", p.name);
        }
    }

    #[test]
    fn test_pool_weights() {
        let sum = |pool: &[Prefix]| pool.iter().map(|p| p.weight).sum::<u32>();
        assert_eq!(sum(&WEAKENED_PREFIXES), 100);
        assert_eq!(sum(&WEAK_PREFIXES), 100);
        assert_eq!(sum(&MEDIUM_PREFIXES), 100);
        assert_eq!(sum(&STRONG_PREFIXES), 100);
    }
}
