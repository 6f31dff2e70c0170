//! Command execution.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use erc1271_account::{
    encode_expiration, eth_signed_message_hash, login_key_authorization_digest, recover_signer,
    AuthKeySet, Erc1271Api, Erc1271Form, Erc1271Validator, FixedTimeSource, Hash,
    LoginKeyRestrictions, RecoverableSignature, SignatureBlob, SystemTimeSource, TimeSource,
    ValidationError, ValidatorConfig, Verdict,
};
use serde::Serialize;
use tracing::debug;

use crate::cli::{AccountArgs, Cli, Command};
use crate::keys::load_key_set;

/// Exit status when the command fails before a validation runs.
pub const EXIT_SETUP_ERROR: u8 = 3;

/// Exit status for the outcome of [`run`].
pub fn exit_code(result: &anyhow::Result<Report>) -> u8 {
    match result {
        Ok(report) => report.exit_code(),
        Err(_) => EXIT_SETUP_ERROR,
    }
}

/// JSON printed for every command.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Verdict {
        form: Erc1271Form,
        accepted: bool,
        result: String,
    },
    Validity {
        valid: bool,
    },
    Reverted {
        reverted: bool,
        reason: &'static str,
        message: String,
    },
    Digest {
        digest: String,
    },
    Authorization {
        login_key: String,
        expires_at: u64,
        restrictions: String,
        authorization_digest: String,
    },
    Inspection(Inspection),
}

impl Report {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Verdict { accepted: false, .. } | Self::Validity { valid: false } => 1,
            Self::Reverted { .. } => 2,
            _ => 0,
        }
    }

    fn reverted(error: ValidationError) -> Self {
        Self::Reverted {
            reverted: true,
            reason: error.reason(),
            message: error.to_string(),
        }
    }

    fn from_verdict(result: Result<Verdict, ValidationError>, form: Erc1271Form) -> Self {
        match result {
            Ok(verdict) => Self::Verdict {
                form,
                accepted: verdict.is_accepted(),
                result: to_hex(&verdict.encode()),
            },
            Err(e) => Self::reverted(e),
        }
    }

    fn from_validity(result: Result<bool, ValidationError>) -> Self {
        match result {
            Ok(valid) => Self::Validity { valid },
            Err(e) => Self::reverted(e),
        }
    }
}

/// Decoded view of a signature blob.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Inspection {
    pub shape: &'static str,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<SignatureParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation: Option<SignatureParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions_error: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SignatureParts {
    pub r: String,
    pub s: String,
    pub v: u8,
    /// Recovered signer, or the recovery error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<String>,
}

impl SignatureParts {
    fn new(bytes: &[u8; 65], digest: Option<&Hash>) -> Self {
        let sig = RecoverableSignature::from_bytes(bytes);
        let signer = digest.map(|digest| match recover_signer(digest, bytes) {
            Ok(address) => to_hex(&address),
            Err(e) => format!("error: {}", e),
        });
        Self {
            r: to_hex(&sig.r),
            s: to_hex(&sig.s),
            v: sig.v,
            signer,
        }
    }
}

pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let report = match &cli.command {
        Command::Digest { digest, signature } => {
            let validator = build_validator(&cli.account)?;
            Report::from_verdict(
                validator.is_valid_signature(digest, &signature.0),
                Erc1271Form::Bytes32,
            )
        }
        Command::Message { message, signature } => {
            let validator = build_validator(&cli.account)?;
            Report::from_verdict(
                validator.is_valid_message_signature(&message.bytes(), &signature.0),
                Erc1271Form::Bytes,
            )
        }
        Command::AuthKey { digest, signature } => {
            let validator = build_validator(&cli.account)?;
            Report::from_validity(validator.is_valid_auth_key_signature(digest, &signature.0))
        }
        Command::LoginKey { digest, signature } => {
            let validator = build_validator(&cli.account)?;
            Report::from_validity(validator.is_valid_login_key_signature(digest, &signature.0))
        }
        Command::HashMessage { message } => Report::Digest {
            digest: to_hex(&eth_signed_message_hash(&message.bytes())),
        },
        Command::AuthorizeLoginKey {
            login_key,
            expires_at,
        } => {
            let restrictions = encode_expiration(*expires_at);
            Report::Authorization {
                login_key: to_hex(login_key),
                expires_at: *expires_at,
                restrictions: to_hex(&restrictions),
                authorization_digest: to_hex(&login_key_authorization_digest(
                    login_key,
                    &restrictions,
                )),
            }
        }
        Command::Inspect { signature, digest } => {
            let config = load_config(cli.account.config.as_deref())?;
            Report::Inspection(inspect(&signature.0, digest.as_ref(), &config))
        }
    };

    Ok(report)
}

/// Validator over the configured keys, with the clock pinned for the whole run.
pub fn build_validator(
    account: &AccountArgs,
) -> anyhow::Result<Erc1271Validator<Arc<AuthKeySet>, FixedTimeSource>> {
    let keys = load_key_set(account.keys.as_deref(), account.owner, &account.auth_keys)?;
    let config = load_config(account.config.as_deref())?;
    let now = account.now.unwrap_or_else(|| SystemTimeSource.now());

    debug!(
        auth_keys = keys.len(),
        now,
        ?config,
        "Validator configured"
    );

    Ok(Erc1271Validator::with_clock(
        Arc::new(keys),
        FixedTimeSource::new(now),
        config,
    ))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ValidatorConfig> {
    let Some(path) = path else {
        return Ok(ValidatorConfig::from_env()?);
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ValidatorConfig::from_json(&contents)
        .with_context(|| format!("invalid config {}", path.display()))
}

/// Classify `signature` and decode its parts without touching any key set.
pub fn inspect(signature: &[u8], digest: Option<&Hash>, config: &ValidatorConfig) -> Inspection {
    let blob = SignatureBlob::parse(signature);
    let mut inspection = Inspection {
        shape: blob.kind(),
        length: blob.len(),
        ..Inspection::default()
    };

    match &blob {
        SignatureBlob::Malformed(_) => {}
        SignatureBlob::Bare(sig) => {
            inspection.primary = Some(SignatureParts::new(sig, digest));
        }
        SignatureBlob::Combined {
            primary,
            delegation,
            restrictions,
        } => {
            // The delegation digest depends on the recovered login key.
            let authorization_digest = digest
                .and_then(|digest| recover_signer(digest, primary).ok())
                .map(|login_key| login_key_authorization_digest(&login_key, restrictions));

            inspection.primary = Some(SignatureParts::new(primary, digest));
            inspection.delegation =
                Some(SignatureParts::new(delegation, authorization_digest.as_ref()));
            inspection.restrictions = Some(to_hex(restrictions));

            match LoginKeyRestrictions::decode(restrictions, &config.restrictions) {
                Ok(decoded) => inspection.expires_at = Some(decoded.expires_at.to_string()),
                Err(e) => inspection.restrictions_error = Some(e.to_string()),
            }
        }
    }

    inspection
}

fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
