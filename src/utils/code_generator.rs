//! Short code generation.
//!
//! Codes are 4 characters drawn uniformly from a 62-symbol alphabet
//! (`0-9a-zA-Z`), giving 62^4 (about 14.7 million) possible codes.
//! Uniqueness is not guaranteed here; callers retry against the entries they
//! currently hold (see [`crate::application::services::LinkService::submit`]).

use rand::Rng;

/// Alphabet used for generated codes.
pub const BASE62_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 4;

/// Source of candidate short codes.
///
/// The service only asks for candidates; collision handling lives with the caller.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform base62 sampler backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct Base62Generator {
    length: usize,
}

impl Base62Generator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for Base62Generator {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}

impl CodeGenerator for Base62Generator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| BASE62_ALPHABET[rng.random_range(0..BASE62_ALPHABET.len())] as char)
            .collect()
    }
}

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 4);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    Base62Generator::default().generate()
}
