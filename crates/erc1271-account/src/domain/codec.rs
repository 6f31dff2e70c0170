//! # Signature Codec
//!
//! Splits an opaque signature blob into one of its recognized shapes. The
//! length is the only discriminator; there is no type tag on the wire.

/// Size of one recoverable signature (`r ‖ s ‖ v`).
pub const SIGNATURE_LENGTH: usize = 65;

/// Smallest combined blob: two signatures and an empty restrictions payload.
pub const COMBINED_SIGNATURE_MIN_LENGTH: usize = 2 * SIGNATURE_LENGTH;

/// A classified signature blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureBlob {
    /// A single auth key signature.
    Bare([u8; SIGNATURE_LENGTH]),
    /// A login key signature plus its delegation.
    Combined {
        /// Login key signature over the message digest.
        primary: [u8; SIGNATURE_LENGTH],
        /// Auth key signature over the login key authorization digest.
        delegation: [u8; SIGNATURE_LENGTH],
        /// Everything after byte 130; may be empty.
        restrictions: Vec<u8>,
    },
    /// Any other length. Kept verbatim so it can be reported and re-encoded.
    Malformed(Vec<u8>),
}

impl SignatureBlob {
    /// Classify raw bytes.
    pub fn parse(bytes: &[u8]) -> Self {
        match bytes.len() {
            SIGNATURE_LENGTH => Self::Bare(split_signature(bytes)),
            len if len >= COMBINED_SIGNATURE_MIN_LENGTH => Self::Combined {
                primary: split_signature(&bytes[..SIGNATURE_LENGTH]),
                delegation: split_signature(&bytes[SIGNATURE_LENGTH..COMBINED_SIGNATURE_MIN_LENGTH]),
                restrictions: bytes[COMBINED_SIGNATURE_MIN_LENGTH..].to_vec(),
            },
            _ => Self::Malformed(bytes.to_vec()),
        }
    }

    /// Assemble a combined blob from its parts.
    pub fn combined(
        primary: [u8; SIGNATURE_LENGTH],
        delegation: [u8; SIGNATURE_LENGTH],
        restrictions: impl Into<Vec<u8>>,
    ) -> Self {
        Self::Combined {
            primary,
            delegation,
            restrictions: restrictions.into(),
        }
    }

    /// Serialize back to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Bare(sig) => sig.to_vec(),
            Self::Combined {
                primary,
                delegation,
                restrictions,
            } => {
                let mut out = Vec::with_capacity(COMBINED_SIGNATURE_MIN_LENGTH + restrictions.len());
                out.extend_from_slice(primary);
                out.extend_from_slice(delegation);
                out.extend_from_slice(restrictions);
                out
            }
            Self::Malformed(bytes) => bytes.clone(),
        }
    }

    /// Wire length of the blob.
    pub fn len(&self) -> usize {
        match self {
            Self::Bare(_) => SIGNATURE_LENGTH,
            Self::Combined { restrictions, .. } => {
                COMBINED_SIGNATURE_MIN_LENGTH + restrictions.len()
            }
            Self::Malformed(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the shape, for logs and tooling.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bare(_) => "bare",
            Self::Combined { .. } => "combined",
            Self::Malformed(_) => "malformed",
        }
    }
}

fn split_signature(bytes: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    let mut sig = [0u8; SIGNATURE_LENGTH];
    sig.copy_from_slice(bytes);
    sig
}
