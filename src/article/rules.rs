use lazy_static::lazy_static;
use regex::Regex;

use super::Article;

/// How a rule decides whether it applies to a token
#[derive(Debug)]
pub enum Matcher {
    /// Anchored regular expression tested against the token prefix
    Pattern(Regex),

    /// Spoken "eleven"/"eighteen" heuristic for numbers written with digits.
    /// Applies to tokens starting with "11" or "18" whose length, after
    /// dropping leading separators, is one more than a multiple of three.
    NumberGroup,
}

impl Matcher {
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(token),
            Matcher::NumberGroup => is_eleven_or_eighteen(token),
        }
    }
}

/// One entry of the ordered rule table
#[derive(Debug)]
pub struct Rule {
    /// Short identifier, used in trace logs
    pub name: &'static str,
    pub matcher: Matcher,
    pub article: Article,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &str, article: Article) -> Self {
        // Patterns are constants; test_table_has_nineteen_rules compiles all of them
        let re = Regex::new(pattern).expect("article rule patterns are valid");
        Self {
            name,
            matcher: Matcher::Pattern(re),
            article,
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        self.matcher.matches(token)
    }
}

// Digits and ordinal suffixes first, then named exceptions and single
// letters, then the broad consonant rule, then vowel exceptions, then the
// broad vowel rule. Anything past the consonant rule starts with a vowel or y.
lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        Rule::pattern("leading-eight", r"^8", Article::An),
        Rule {
            name: "eleven-eighteen",
            matcher: Matcher::NumberGroup,
            article: Article::An,
        },
        Rule::pattern("ordinal-consonant", r"(?i)^[bcdgjkpqtuvwyz]-?th", Article::A),
        Rule::pattern("ordinal-vowel", r"(?i)^[aefhilmnorsx]-?th", Article::An),
        Rule::pattern("silent-h", r"(?i)^(?:euler|hour|heir|honest|hono)", Article::An),
        Rule::pattern("letter-vowel", r"(?i)^[aefhilmnorsx]$", Article::An),
        Rule::pattern("letter-consonant", r"(?i)^[bcdgjkpqtuvwyz]$", Article::A),
        Rule::pattern(
            "abbreviation",
            concat!(
                r"^(?:FJO|[HLMNS]Y.|RY[EO]|SQU",
                r"|(?:F[LR]?|[HL]|MN?|N|RH?|S[CHKLMNPTVW]?|X(?:YL)?)[AEIOU])",
                r"[FHLMNRSX][A-Z]",
            ),
            Article::An,
        ),
        Rule::pattern("initial-vowel", r"(?i)^[aefhilmnorsx][.-]", Article::An),
        Rule::pattern("initial", r"(?i)^[a-z][.-]", Article::A),
        Rule::pattern("consonant", r"(?i)^[^aeiouy]", Article::A),
        Rule::pattern("eu-ew", r"(?i)^e[uw]", Article::A),
        // ASCII word boundary after "one"/"once"
        Rule::pattern("one-once", r"(?i)^onc?e(?:[^0-9A-Za-z_]|$)", Article::A),
        Rule::pattern("uni", r"(?i)^uni(?:[^nmd]|mo)", Article::A),
        Rule::pattern("utt-uth", r"(?i)^ut[th]", Article::An),
        Rule::pattern("u-consonant-vowel", r"(?i)^u[bcfhjkqrst][aeiou]", Article::A),
        Rule::pattern("u-abbreviation", r"^U[NKR][AIEO]?", Article::A),
        Rule::pattern("vowel", r"(?i)^[aeiou]", Article::An),
        Rule::pattern(
            "y-vowel-sound",
            r"(?i)^y(?:b[lor]|cl[ea]|fere|gg|p[ios]|rou|tt)",
            Article::An,
        ),
    ];
}

/// The rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    RULES.as_slice()
}

fn is_number_separator(c: char) -> bool {
    matches!(c, ',' | '.' | ' ' | '\t' | '\n' | '\r' | '\x0C')
}

fn is_eleven_or_eighteen(token: &str) -> bool {
    if !(token.starts_with("11") || token.starts_with("18")) {
        return false;
    }

    let digits = token.trim_start_matches(is_number_separator);
    digits.len() % 3 == 1
}
