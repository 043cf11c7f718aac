/// Public RSA components as big-endian unsigned integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicComponents {
    pub n: Vec<u8>,
    pub e: Vec<u8>,
}

/// Private RSA components as big-endian unsigned integers.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateComponents {
    pub n: Vec<u8>,
    pub e: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub dp: Vec<u8>,
    pub dq: Vec<u8>,
    pub qi: Vec<u8>,
    pub d: Vec<u8>,
}

impl PrivateComponents {
    pub fn to_public(&self) -> PublicComponents {
        PublicComponents {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }
}

impl std::fmt::Debug for PrivateComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateComponents")
            .field("n_len", &self.n.len())
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}
