//! Word pools and randomization helpers.
//!
//! These feed the election and session engines but carry no state of
//! their own: a Fisher-Yates shuffle, uniform element selection, title
//! casing, and bill-name synthesis from fixed word lists.

use rand::Rng;

use rollcall_types::Point;

// -----------------------------------------------------------------------
// Word pools
// -----------------------------------------------------------------------

/// Built-in pool of legislator names. Elections shuffle this pool and
/// cycle through it, so duplicates only appear in chambers larger than
/// the pool.
pub const LEGISLATOR_NAMES: &[&str] = &[
    "Ada Quill", "Bram Hollis", "Cora Vance", "Dario Flint", "Edda Marsh",
    "Felix Crane", "Greta Solis", "Hugo Larkin", "Ines Calder", "Jonas Reed",
    "Kaia Thorne", "Lionel Ashby", "Mira Falk", "Nestor Gale", "Odette Pryor",
    "Pavel Stroud", "Quinn Harlow", "Rosa Delgado", "Silas Mercer", "Tamsin Lowe",
    "Ulric Fenn", "Vera Lindqvist", "Wendell Cross", "Xenia Marlow", "Yusuf Hale",
    "Zelda Crane", "Arlo Whitfield", "Beatrix Senna", "Caspian Holt", "Delia Frost",
    "Emrys Vaughan", "Freya Nakamura", "Gideon Pike", "Halima Osei", "Ivo Brandt",
    "Juniper Wilde", "Kofi Mensah", "Leona Castellan", "Matteo Ricci", "Nadia Sorel",
    "Orin Blackwood", "Petra Lindh", "Quentin Mora", "Renata Voss", "Stellan Okafor",
    "Thea Winslow", "Umberto Sala", "Vivienne Clery", "Walter Finch", "Ximena Duarte",
    "Yara Solberg", "Zeno Albright", "Astrid Kovac", "Bruno Tallis", "Clementine Rhys",
    "Dmitri Valen",
];

/// Adjectives for bill names.
pub const ADJECTIVES: &[&str] = &[
    "fair", "prosperous", "secure", "modern", "rural", "urban", "national",
    "sustainable", "affordable", "universal", "historic", "emergency",
    "comprehensive", "bipartisan", "responsible", "patriotic", "green",
    "digital", "equitable", "resilient", "transparent", "bold", "prudent",
    "united", "sovereign", "civic", "regional", "strategic", "humane",
    "efficient", "open", "honest",
];

/// Nouns for bill names; the default party-name pool also derives from
/// this list.
pub const NOUNS: &[&str] = &[
    "harvest", "railway", "commerce", "frontier", "liberty", "industry",
    "heritage", "science", "housing", "forest", "water", "energy",
    "justice", "education", "medicine", "labor", "fishery", "highway",
    "currency", "border", "harbor", "privacy", "broadband", "grain",
    "pension", "militia", "census", "archive", "aqueduct", "orchard",
    "foundry", "granary",
];

/// Verbs for bill names.
pub const VERBS: &[&str] = &[
    "protection", "expansion", "reform", "modernization", "preservation",
    "investment", "relief", "oversight", "standards", "development",
    "restoration", "accountability", "innovation", "access", "fairness",
    "security", "renewal", "stabilization", "deregulation", "funding",
    "registration", "conservation", "promotion", "enforcement",
];

/// Default issue universe: broad policy areas actors can identify with.
pub const ISSUES: &[&str] = &[
    "Health", "Defense", "Education", "Taxation", "Infrastructure",
    "Agriculture", "Trade", "Environment", "Immigration", "Housing",
    "Energy", "Transportation", "Justice", "Labor", "Science", "Culture",
];

// -----------------------------------------------------------------------
// Randomization helpers
// -----------------------------------------------------------------------

/// Shuffle a slice in place with the Fisher-Yates algorithm (uniform over
/// all permutations).
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Select a uniformly random element. Returns `None` on an empty slice;
/// the original slice is untouched.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.random_range(0..pool.len()))
}

/// Generate a uniformly random compass point with each axis in
/// `[-limit, limit)`.
pub fn random_compass(limit: f64, rng: &mut impl Rng) -> Point {
    Point::new(
        rng.random_range(-limit..limit),
        rng.random_range(-limit..limit),
    )
}

// -----------------------------------------------------------------------
// Bill names
// -----------------------------------------------------------------------

/// Title-case a phrase: first letter of each word upper-cased, the rest
/// lower-cased.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Synthesize a random bill name of the form
/// `"<Adjective> <Noun> <Verb> Act"`, each word drawn uniformly with
/// replacement from the fixed pools.
pub fn bill_name(rng: &mut impl Rng) -> String {
    // The pools are non-empty constants; the fallbacks are unreachable.
    let adjective = pick(ADJECTIVES, rng).copied().unwrap_or("general");
    let noun = pick(NOUNS, rng).copied().unwrap_or("commerce");
    let verb = pick(VERBS, rng).copied().unwrap_or("reform");
    title_case(&format!("{adjective} {noun} {verb} act"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn pick_returns_none_on_empty() {
        let mut rng = SmallRng::seed_from_u64(7);
        let empty: Vec<u8> = vec![];
        assert!(pick(&empty, &mut rng).is_none());
    }

    #[test]
    fn pick_always_returns_pool_member() {
        let mut rng = SmallRng::seed_from_u64(11);
        let pool = ["a", "b", "c"];
        for _ in 0..50 {
            let choice = pick(&pool, &mut rng).unwrap();
            assert!(pool.contains(choice));
        }
    }

    #[test]
    fn random_compass_stays_in_limit() {
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..100 {
            let point = random_compass(5.0, &mut rng);
            assert!(point.x >= -5.0 && point.x < 5.0);
            assert!(point.y >= -5.0 && point.y < 5.0);
        }
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("fair harvest reform act"), "Fair Harvest Reform Act");
        assert_eq!(title_case("ALL CAPS input"), "All Caps Input");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn bill_names_end_in_act() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..20 {
            let name = bill_name(&mut rng);
            assert!(name.ends_with(" Act"), "unexpected bill name: {name}");
            assert_eq!(name.split_whitespace().count(), 4);
        }
    }
}
