//! Simulated SMS code service.
//!
//! One outstanding code lives in a [`CodeStore`] under a fixed key. Issuing a
//! new code overwrites the previous one; a successful login clears it. The
//! store is a trait so the browser build can back it with `localStorage`
//! while tests use [`MemoryCodeStore`].

use std::fmt;

use rand::Rng;
use thiserror::Error;

pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Codes are always six digits; values outside the range are clamped.
    pub fn from_number(value: u32) -> Self {
        Self(value.clamp(CODE_MIN, CODE_MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("code storage unavailable")]
    Unavailable,
    #[error("code storage rejected operation: {0}")]
    Rejected(String),
}

/// Key-value slot holding the single outstanding code.
pub trait CodeStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, code: &str) -> Result<(), StoreError>;
    fn remove(&mut self) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCodeStore {
    value: Option<String>,
}

impl CodeStore for MemoryCodeStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, code: &str) -> Result<(), StoreError> {
        self.value = Some(code.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.value = None;
        Ok(())
    }
}

pub trait CodeGenerator {
    fn generate(&mut self) -> VerificationCode;
}

/// Uniform over `CODE_MIN..=CODE_MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&mut self) -> VerificationCode {
        VerificationCode::from_number(rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX))
    }
}

#[derive(Debug, Clone)]
pub struct CodeService<S, G = RandomCodeGenerator> {
    store: S,
    generator: G,
}

impl<S: CodeStore> CodeService<S> {
    pub fn with_store(store: S) -> Self {
        Self::new(store, RandomCodeGenerator)
    }
}

impl<S: CodeStore, G: CodeGenerator> CodeService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self { store, generator }
    }

    /// Generate a fresh code and overwrite whatever was stored.
    pub fn issue(&mut self) -> Result<VerificationCode, StoreError> {
        let code = self.generator.generate();
        self.store.save(code.as_str())?;
        tracing::debug!(code = %code, "generated verification code");
        Ok(code)
    }

    /// A missing code never verifies.
    pub fn verify(&self, candidate: &str) -> bool {
        match self.store.load() {
            Ok(Some(stored)) => stored == candidate,
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored verification code");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove() {
            tracing::warn!(error = %e, "failed to remove stored verification code");
        }
    }

    /// Current stored value, `None` when absent or unreadable.
    pub fn stored(&self) -> Option<String> {
        self.store.load().ok().flatten()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Hands out the given codes in order, then repeats the last one.
    pub(crate) struct ScriptedGenerator {
        codes: Vec<u32>,
        next: usize,
    }

    impl ScriptedGenerator {
        pub(crate) fn new(codes: &[u32]) -> Self {
            Self {
                codes: codes.to_vec(),
                next: 0,
            }
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn generate(&mut self) -> VerificationCode {
            let idx = self.next.min(self.codes.len() - 1);
            self.next += 1;
            VerificationCode::from_number(self.codes[idx])
        }
    }

    /// Store whose backend is gone.
    #[derive(Default)]
    pub(crate) struct BrokenStore;

    impl CodeStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn save(&mut self, _code: &str) -> Result<(), StoreError> {
            Err(StoreError::Rejected("quota exceeded".to_string()))
        }

        fn remove(&mut self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn random_codes_are_six_digits_in_range() {
        let mut generator = RandomCodeGenerator;
        for _ in 0..1_000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), 6);
            let value: u32 = code.as_str().parse().expect("numeric code");
            assert!((CODE_MIN..=CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn issue_overwrites_previous_code() {
        let mut service =
            CodeService::new(MemoryCodeStore::default(), ScriptedGenerator::new(&[111111, 222222]));

        let first = service.issue().expect("issue");
        assert_eq!(service.stored().as_deref(), Some("111111"));
        assert!(service.verify(first.as_str()));

        service.issue().expect("issue");
        assert_eq!(service.stored().as_deref(), Some("222222"));
        assert!(!service.verify("111111"));
        assert!(service.verify("222222"));
    }

    #[test]
    fn verify_without_stored_code_is_false() {
        let service = CodeService::with_store(MemoryCodeStore::default());
        assert!(!service.verify(""));
        assert!(!service.verify("123456"));
    }

    #[test]
    fn clear_removes_code() {
        let mut service =
            CodeService::new(MemoryCodeStore::default(), ScriptedGenerator::new(&[654321]));
        service.issue().expect("issue");
        service.clear();
        assert_eq!(service.stored(), None);
        assert!(!service.verify("654321"));
    }

    #[test]
    fn broken_store_fails_issue_and_never_verifies() {
        let mut service = CodeService::new(BrokenStore, ScriptedGenerator::new(&[123456]));
        assert_eq!(
            service.issue(),
            Err(StoreError::Rejected("quota exceeded".to_string()))
        );
        assert!(!service.verify("123456"));
        service.clear();
        assert_eq!(service.stored(), None);
    }

    #[test]
    fn from_number_clamps_to_six_digits() {
        assert_eq!(VerificationCode::from_number(42).as_str(), "100000");
        assert_eq!(VerificationCode::from_number(5_000_000).as_str(), "999999");
        assert_eq!(VerificationCode::from_number(123456).to_string(), "123456");
    }
}
