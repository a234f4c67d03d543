use std::{convert::Infallible, fmt::Debug, fmt::Display, str::FromStr};

/// The key exchange a premaster secret came out of.
///
/// This only matters for the rollback check: an RSA premaster secret starts
/// with the version the client offered, nothing else does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PremasterAlgorithm {
    /// `TlsRsaPremasterSecret`
    Rsa,
    /// Any other premaster secret, e.g. `TlsPremasterSecret` from (EC)DHE.
    Other(String),
}

impl PremasterAlgorithm {
    const RSA_NAME: &'static str = "TlsRsaPremasterSecret";

    pub fn from_name(name: &str) -> Self {
        if name == Self::RSA_NAME {
            PremasterAlgorithm::Rsa
        } else {
            PremasterAlgorithm::Other(name.to_owned())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PremasterAlgorithm::Rsa => Self::RSA_NAME,
            PremasterAlgorithm::Other(name) => name,
        }
    }

    /// Whether the premaster secret carries a `client_version`.
    pub fn embeds_version(&self) -> bool {
        matches!(self, PremasterAlgorithm::Rsa)
    }
}

impl FromStr for PremasterAlgorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Display for PremasterAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The secret produced by the key exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct PremasterSecret {
    bytes: Vec<u8>,
    algorithm: PremasterAlgorithm,
}

impl PremasterSecret {
    pub fn new(bytes: Vec<u8>, algorithm: PremasterAlgorithm) -> Self {
        Self { bytes, algorithm }
    }

    pub fn rsa(bytes: Vec<u8>) -> Self {
        Self::new(bytes, PremasterAlgorithm::Rsa)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn algorithm(&self) -> &PremasterAlgorithm {
        &self.algorithm
    }
}

// never print the secret
impl Debug for PremasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PremasterSecret")
            .field("algorithm", &self.algorithm)
            .field("len", &self.bytes.len())
            .finish()
    }
}
