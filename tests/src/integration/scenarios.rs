//! # ERC-1271 Scenarios
//!
//! Auth key and login key flows as an ERC-1271 caller sees them:
//!
//! 1. Auth key signs a digest or a personal message
//! 2. Login key signs, with an auth key delegation carrying an expiration
//! 3. Malformed blobs revert with a length reason, never a sentinel

#[cfg(test)]
mod tests {
    use erc1271_account::test_helpers::combined_signature;
    use erc1271_account::{
        encode_expiration, eth_signed_message_hash, keccak256, EmptyRestrictions, Erc1271Api,
        RestrictionsPolicy, SignatureBlob, ValidationError, ValidatorConfig, Verdict,
        ERC1271_INVALID_SIGNATURE, ERC1271_MAGIC_VALUE_BYTES, ERC1271_MAGIC_VALUE_BYTES32,
    };

    use crate::fixtures::{Account, EXPIRATION, GOODBYE, HELLO};

    const ACCEPTED_BYTES32: Verdict = Verdict::Accepted(ERC1271_MAGIC_VALUE_BYTES32);
    const ACCEPTED_BYTES: Verdict = Verdict::Accepted(ERC1271_MAGIC_VALUE_BYTES);
    const REJECTED: Verdict = Verdict::Rejected(ERC1271_INVALID_SIGNATURE);

    fn login_key_blob(account: &Account, message: &[u8], expiration: u64) -> Vec<u8> {
        combined_signature(
            &eth_signed_message_hash(message),
            &account.login_key,
            &account.auth_key,
            &encode_expiration(expiration),
        )
    }

    // =========================================================================
    // AUTH KEY PATH
    // =========================================================================

    #[test]
    fn test_auth_key_signature_accepted_on_every_entry_point() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let signature = account.auth_key.sign(&digest);

        assert!(account
            .validator
            .is_valid_auth_key_signature(&digest, &signature)
            .unwrap());
        assert_eq!(
            account.validator.is_valid_signature(&digest, &signature),
            Ok(ACCEPTED_BYTES32)
        );
        assert_eq!(
            account
                .validator
                .is_valid_message_signature(HELLO, &signature),
            Ok(ACCEPTED_BYTES)
        );
    }

    #[test]
    fn test_owner_is_an_auth_key() {
        let account = Account::new();
        let digest = keccak256(b"owner");

        assert_eq!(
            account
                .validator
                .is_valid_signature(&digest, &account.owner.sign(&digest)),
            Ok(ACCEPTED_BYTES32)
        );
    }

    #[test]
    fn test_non_member_rejected_not_reverted() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);

        for signer in [&account.stranger, &account.login_key] {
            let signature = signer.sign(&digest);
            assert_eq!(
                account.validator.is_valid_signature(&digest, &signature),
                Ok(REJECTED)
            );
            assert_eq!(
                account
                    .validator
                    .is_valid_auth_key_signature(&digest, &signature),
                Ok(false)
            );
        }
    }

    #[test]
    fn test_auth_key_signature_over_other_message_rejected() {
        let account = Account::new();
        let signature = account.auth_key.sign(&eth_signed_message_hash(HELLO));
        let bad_digest = eth_signed_message_hash(GOODBYE);

        assert_eq!(
            account.validator.is_valid_signature(&bad_digest, &signature),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_message_signature(GOODBYE, &signature),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_auth_key_signature(&bad_digest, &signature),
            Ok(false)
        );
    }

    // =========================================================================
    // LOGIN KEY PATH
    // =========================================================================

    #[test]
    fn test_login_key_signature_accepted_on_every_entry_point() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let blob = login_key_blob(&account, HELLO, EXPIRATION);

        assert_eq!(blob.len(), 162);
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(ACCEPTED_BYTES32)
        );
        assert_eq!(
            account.validator.is_valid_message_signature(HELLO, &blob),
            Ok(ACCEPTED_BYTES)
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &blob),
            Ok(true)
        );
    }

    #[test]
    fn test_login_key_usable_through_expiration_second() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let blob = login_key_blob(&account, HELLO, EXPIRATION);

        account.clock.set(EXPIRATION);
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(ACCEPTED_BYTES32)
        );

        account.clock.set(EXPIRATION + 1);
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &blob),
            Ok(false)
        );
    }

    #[test]
    fn test_login_key_over_other_message_rejected() {
        let account = Account::new();
        let blob = login_key_blob(&account, HELLO, EXPIRATION);
        let bad_digest = eth_signed_message_hash(GOODBYE);

        assert_eq!(
            account.validator.is_valid_signature(&bad_digest, &blob),
            Ok(REJECTED)
        );
        assert_eq!(
            account.validator.is_valid_message_signature(GOODBYE, &blob),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&bad_digest, &blob),
            Ok(false)
        );
    }

    #[test]
    fn test_trailing_byte_stays_combined_and_rejects() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let mut blob = login_key_blob(&account, HELLO, EXPIRATION);
        blob.push(0xab);

        assert!(matches!(
            SignatureBlob::parse(&blob),
            SignatureBlob::Combined { ref restrictions, .. } if restrictions.len() == 33
        ));
        // The delegation no longer covers the restrictions bytes
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &blob),
            Ok(false)
        );
    }

    #[test]
    fn test_delegation_by_non_member_rejected() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let blob = combined_signature(
            &digest,
            &account.login_key,
            &account.stranger,
            &encode_expiration(EXPIRATION),
        );

        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(REJECTED)
        );
    }

    #[test]
    fn test_delegation_for_other_login_key_rejected() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let restrictions = encode_expiration(EXPIRATION);

        // Auth key vouched for the stranger, but the login key signed
        let blob = SignatureBlob::combined(
            account.login_key.sign(&digest),
            account
                .auth_key
                .authorize_login_key(&account.stranger.address(), &restrictions),
            restrictions,
        )
        .encode();

        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(REJECTED)
        );
    }

    #[test]
    fn test_extended_expiration_needs_new_delegation() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let original = SignatureBlob::parse(&login_key_blob(&account, HELLO, EXPIRATION));

        // Swap in a later expiration without re-signing the delegation
        let tampered = match original {
            SignatureBlob::Combined {
                primary,
                delegation,
                ..
            } => SignatureBlob::combined(primary, delegation, encode_expiration(u64::MAX)),
            other => panic!("expected combined blob, got {:?}", other),
        };

        assert_eq!(
            account
                .validator
                .is_valid_signature(&digest, &tampered.encode()),
            Ok(REJECTED)
        );
    }

    #[test]
    fn test_auth_key_as_login_key_follows_login_key_rules() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        // The auth key signs as a login key, delegated by the owner
        let blob = combined_signature(
            &digest,
            &account.auth_key,
            &account.owner,
            &encode_expiration(EXPIRATION),
        );

        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(ACCEPTED_BYTES32)
        );

        // Expired restrictions reject even though the primary signer is an auth key
        account.clock.set(EXPIRATION + 1);
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(REJECTED)
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &blob),
            Ok(false)
        );

        // The same key signing bare is unaffected by the clock
        assert_eq!(
            account
                .validator
                .is_valid_signature(&digest, &account.auth_key.sign(&digest)),
            Ok(ACCEPTED_BYTES32)
        );
    }

    // =========================================================================
    // RESTRICTIONS POLICY
    // =========================================================================

    #[test]
    fn test_empty_restrictions_revert_by_default() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let blob = combined_signature(&digest, &account.login_key, &account.auth_key, &[]);

        assert_eq!(blob.len(), 130);
        let err = account
            .validator
            .is_valid_signature(&digest, &blob)
            .unwrap_err();
        assert_eq!(err.reason(), "malformed_restrictions");
    }

    #[test]
    fn test_empty_restrictions_never_expire_when_configured() {
        let account = Account::with_config(ValidatorConfig {
            restrictions: RestrictionsPolicy {
                empty_restrictions: EmptyRestrictions::NoExpiry,
                ..RestrictionsPolicy::default()
            },
        });
        let digest = eth_signed_message_hash(HELLO);
        let blob = combined_signature(&digest, &account.login_key, &account.auth_key, &[]);

        account.clock.set(u64::MAX);
        assert_eq!(
            account.validator.is_valid_signature(&digest, &blob),
            Ok(ACCEPTED_BYTES32)
        );
    }

    #[test]
    fn test_strict_length_reverts_on_trailing_bytes() {
        let account = Account::with_config(ValidatorConfig {
            restrictions: RestrictionsPolicy {
                strict_length: true,
                ..RestrictionsPolicy::default()
            },
        });
        let digest = eth_signed_message_hash(HELLO);
        let mut restrictions = encode_expiration(EXPIRATION).to_vec();
        restrictions.push(0x00);
        let blob =
            combined_signature(&digest, &account.login_key, &account.auth_key, &restrictions);

        assert!(matches!(
            account.validator.is_valid_signature(&digest, &blob),
            Err(ValidationError::Restrictions(_))
        ));
    }

    // =========================================================================
    // STRUCTURAL FAILURES
    // =========================================================================

    #[test]
    fn test_truncated_auth_key_signature_reverts() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let signature = account.auth_key.sign(&digest);
        let truncated = &signature[..64];

        assert_eq!(
            account
                .validator
                .is_valid_auth_key_signature(&digest, truncated),
            Err(ValidationError::InvalidAuthKeySignatureLength(64))
        );
        assert_eq!(
            account.validator.is_valid_signature(&digest, truncated),
            Err(ValidationError::InvalidSignatureLength(64))
        );
        assert_eq!(
            account.validator.is_valid_message_signature(HELLO, truncated),
            Err(ValidationError::InvalidSignatureLength(64))
        );
    }

    #[test]
    fn test_lengths_between_shapes_revert() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let mut signature = account.auth_key.sign(&digest).to_vec();
        signature.push(0xab);

        for len in [1, 64, 66, 100, 129] {
            let blob = vec![0x5a; len];
            let err = account
                .validator
                .is_valid_signature(&digest, &blob)
                .unwrap_err();
            assert!(err.is_length_error(), "length {} gave {:?}", len, err);
        }

        assert_eq!(
            account.validator.is_valid_signature(&digest, &signature),
            Err(ValidationError::InvalidSignatureLength(66))
        );
    }

    #[test]
    fn test_login_key_entry_requires_combined_length() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let signature = account.auth_key.sign(&digest);

        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &signature),
            Err(ValidationError::InvalidLoginKeySignatureLength(65))
        );
        assert_eq!(
            account
                .validator
                .is_valid_login_key_signature(&digest, &signature[..64]),
            Err(ValidationError::InvalidLoginKeySignatureLength(64))
        );
    }

    #[test]
    fn test_auth_key_entry_rejects_combined_blob() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let blob = login_key_blob(&account, HELLO, EXPIRATION);

        assert_eq!(
            account.validator.is_valid_auth_key_signature(&digest, &blob),
            Err(ValidationError::InvalidAuthKeySignatureLength(162))
        );
    }

    #[test]
    fn test_bad_recovery_id_reverts() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let mut signature = account.auth_key.sign(&digest);
        signature[64] = 29;

        let err = account
            .validator
            .is_valid_signature(&digest, &signature)
            .unwrap_err();
        assert_eq!(err.reason(), "invalid_recovery_id");
    }

    #[test]
    fn test_recovery_failure_in_delegation_reverts() {
        let account = Account::new();
        let digest = eth_signed_message_hash(HELLO);
        let mut blob = login_key_blob(&account, HELLO, EXPIRATION);
        // Zero the delegation's r
        blob[65..97].fill(0);

        let err = account
            .validator
            .is_valid_signature(&digest, &blob)
            .unwrap_err();
        assert_eq!(err.reason(), "scalar_out_of_range");
    }
}
