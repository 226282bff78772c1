//! Read-only parameter tables of the acceptance suite and the cases built
//! from them.
use crate::domain::{FavoriteDraft, MAX_TITLE_LENGTH};
use rand::Rng;

pub const DEFAULT_TITLE: &str = "TestTitle";
pub const DEFAULT_LAT: f64 = 50.0;
pub const DEFAULT_LON: f64 = 50.0;
pub const DEFAULT_COLOR: &str = "BLUE";

pub const VALID_COLORS: [&str; 4] = ["BLUE", "GREEN", "RED", "YELLOW"];
pub const INVALID_COLORS: [&str; 3] = ["PURPLE", "", "#0000FF"];

pub const ACCEPTED_TITLE_LENGTHS: [usize; 3] = [1, 500, MAX_TITLE_LENGTH];
pub const REJECTED_TITLE_LENGTHS: [usize; 2] = [0, MAX_TITLE_LENGTH + 1];

pub const ACCEPTED_LATITUDES: [f64; 7] = [
    -90.0, -50.555555, -0.000001, 0.0, 0.000001, 50.555555, 90.0,
];
pub const REJECTED_LATITUDES: [f64; 6] = [-150.0, -90.000001, -91.0, 90.000001, 91.0, 150.0];

pub const ACCEPTED_LONGITUDES: [f64; 7] = [
    -180.0, -90.555555, -0.000001, 0.0, 0.000001, 90.555555, 180.0,
];
pub const REJECTED_LONGITUDES: [f64; 6] =
    [-200.0, -181.0, -180.000001, 180.000001, 181.0, 200.0];

/// Digits, letters, punctuation, then the six whitespace characters.
const PRINTABLE: &[u8] = b"0123456789\
    abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
    !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";
const PRINTABLE_WHITESPACE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Baseline,
    Color,
    Title,
    Latitude,
    Longitude,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Baseline,
        Category::Color,
        Category::Title,
        Category::Latitude,
        Category::Longitude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Baseline => "baseline",
            Category::Color => "color",
            Category::Title => "title",
            Category::Latitude => "latitude",
            Category::Longitude => "longitude",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub category: Category,
    pub draft: FavoriteDraft,
}

impl TestCase {
    fn new(name: String, category: Category, draft: FavoriteDraft) -> Self {
        Self {
            name,
            category,
            draft,
        }
    }
}

/// A random title over the printable ASCII set. The first character is never
/// whitespace so that a one-character title is not blank.
pub fn random_printable_title(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|position| {
            let pool = if position == 0 {
                &PRINTABLE[..PRINTABLE.len() - PRINTABLE_WHITESPACE]
            } else {
                PRINTABLE
            };
            pool[rng.gen_range(0..pool.len())] as char
        })
        .collect()
}

fn default_draft() -> FavoriteDraft {
    FavoriteDraft::new(DEFAULT_TITLE, DEFAULT_LAT, DEFAULT_LON)
}

fn baseline_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "favorite_with_color".into(),
            Category::Baseline,
            default_draft().with_color(DEFAULT_COLOR),
        ),
        TestCase::new(
            "favorite_without_color".into(),
            Category::Baseline,
            default_draft(),
        ),
    ]
}

fn color_cases() -> Vec<TestCase> {
    let accepted = VALID_COLORS.into_iter().map(|color| {
        TestCase::new(
            format!("color_accepted_{}", color),
            Category::Color,
            default_draft().with_color(color),
        )
    });
    let rejected = INVALID_COLORS.into_iter().map(|color| {
        TestCase::new(
            format!("color_rejected_{:?}", color),
            Category::Color,
            default_draft().with_color(color),
        )
    });
    accepted.chain(rejected).collect()
}

fn title_cases() -> Vec<TestCase> {
    let accepted = ACCEPTED_TITLE_LENGTHS
        .into_iter()
        .map(|length| ("accepted", length));
    let rejected = REJECTED_TITLE_LENGTHS
        .into_iter()
        .map(|length| ("rejected", length));
    accepted
        .chain(rejected)
        .map(|(outcome, length)| {
            let mut draft = default_draft();
            draft.title = random_printable_title(length);
            TestCase::new(
                format!("title_{}_length_{}", outcome, length),
                Category::Title,
                draft,
            )
        })
        .collect()
}

fn latitude_cases() -> Vec<TestCase> {
    let accepted = ACCEPTED_LATITUDES.into_iter().map(|lat| ("accepted", lat));
    let rejected = REJECTED_LATITUDES.into_iter().map(|lat| ("rejected", lat));
    accepted
        .chain(rejected)
        .map(|(outcome, lat)| {
            TestCase::new(
                format!("lat_{}_{}", outcome, lat),
                Category::Latitude,
                FavoriteDraft::new(DEFAULT_TITLE, lat, DEFAULT_LON),
            )
        })
        .collect()
}

fn longitude_cases() -> Vec<TestCase> {
    let accepted = ACCEPTED_LONGITUDES.into_iter().map(|lon| ("accepted", lon));
    let rejected = REJECTED_LONGITUDES.into_iter().map(|lon| ("rejected", lon));
    accepted
        .chain(rejected)
        .map(|(outcome, lon)| {
            TestCase::new(
                format!("lon_{}_{}", outcome, lon),
                Category::Longitude,
                FavoriteDraft::new(DEFAULT_TITLE, DEFAULT_LAT, lon),
            )
        })
        .collect()
}

/// Cases of one category, in table order. Titles are drawn afresh on every
/// call.
pub fn cases_in(category: Category) -> Vec<TestCase> {
    match category {
        Category::Baseline => baseline_cases(),
        Category::Color => color_cases(),
        Category::Title => title_cases(),
        Category::Latitude => latitude_cases(),
        Category::Longitude => longitude_cases(),
    }
}

pub fn all_cases() -> Vec<TestCase> {
    Category::ALL.into_iter().flat_map(cases_in).collect()
}
