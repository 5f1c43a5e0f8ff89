use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, TryRngCore};
use tracing::debug;

use crate::error::InvalidRequest;

/// Shortest password the composer will produce.
pub const MIN_LENGTH: usize = 4;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four disjoint alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Inputs collected from the options panel. Built right before a
/// generation and thrown away afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationRequest {
    pub fn new(
        length: usize,
        include_upper: bool,
        include_lower: bool,
        include_digits: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length,
            include_upper,
            include_lower,
            include_digits,
            include_symbols,
        }
    }

    /// Enabled classes, always in Upper, Lower, Digit, Symbol order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let flags = [
            self.include_upper,
            self.include_lower,
            self.include_digits,
            self.include_symbols,
        ];
        CharClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }

    /// Union of the enabled alphabets.
    pub fn active_alphabet(&self) -> Vec<char> {
        self.enabled_classes()
            .into_iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }

    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.length < MIN_LENGTH {
            return Err(InvalidRequest::too_short(self.length));
        }
        if self.enabled_classes().is_empty() {
            return Err(InvalidRequest::NoCharacterClass);
        }
        Ok(())
    }
}

fn pick<R: Rng + ?Sized>(alphabet: &[u8], rng: &mut R) -> char {
    char::from(alphabet[rng.random_range(0..alphabet.len())])
}

/// Builds a password for `request`, drawing every character and the final
/// shuffle from `rng`.
///
/// One character from each enabled class is placed first, the rest of the
/// length is filled from the whole active alphabet, then everything is
/// shuffled. If the length is smaller than the number of enabled classes the
/// guaranteed characters are truncated and coverage is not complete.
pub fn compose<R>(request: &GenerationRequest, rng: &mut R) -> Result<String, InvalidRequest>
where
    R: CryptoRng + ?Sized,
{
    request.validate()?;

    let classes = request.enabled_classes();
    let alphabet: String = classes.iter().map(|class| class.alphabet()).collect();

    let mut chars: Vec<char> = classes
        .iter()
        .map(|class| pick(class.alphabet().as_bytes(), rng))
        .collect();

    if request.length < chars.len() {
        chars.truncate(request.length);
    } else {
        let filler = request.length - chars.len();
        let pool = alphabet.as_bytes();
        chars.extend((0..filler).map(|_| pick(pool, rng)));
    }

    chars.shuffle(rng);

    debug!(
        length = request.length,
        classes = classes.len(),
        alphabet = alphabet.len(),
        "composed password"
    );
    Ok(chars.into_iter().collect())
}

/// Generates a password from the operating system's secure random source.
pub fn generate_password(
    length: usize,
    use_uppercase: bool,
    use_lowercase: bool,
    use_digits: bool,
    use_symbols: bool,
) -> Result<String, InvalidRequest> {
    let request = GenerationRequest::new(
        length,
        use_uppercase,
        use_lowercase,
        use_digits,
        use_symbols,
    );
    let mut rng = OsRng.unwrap_err();
    compose(&request, &mut rng)
}

/// Rough strength in bits: length * log2(alphabet size).
/// Returns 0.0 for requests the composer would reject.
pub fn estimate_entropy(request: &GenerationRequest) -> f64 {
    if request.validate().is_err() {
        return 0.0;
    }
    let space = request.active_alphabet().len() as f64;
    request.length as f64 * space.log2()
}
