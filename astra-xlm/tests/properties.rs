//! Property tests for SLIP-0010 derivation and StrKey encoding.

use astra_xlm::slip10::FIRST_HARDENED_INDEX;
use astra_xlm::{Error, Keypair, derive, strkey};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = [u8; 64]> {
    proptest::collection::vec(any::<u8>(), 64).prop_map(|bytes| {
        let mut seed = [0u8; 64];
        seed.copy_from_slice(&bytes);
        seed
    })
}

proptest! {
    #[test]
    fn derivation_is_deterministic(seed in seed_strategy(), index in 0..FIRST_HARDENED_INDEX) {
        let a = derive(&seed, index).unwrap();
        let b = derive(&seed, index).unwrap();
        prop_assert_eq!(*a, *b);
    }

    #[test]
    fn adjacent_accounts_differ(seed in seed_strategy(), index in 0..FIRST_HARDENED_INDEX - 1) {
        let a = derive(&seed, index).unwrap();
        let b = derive(&seed, index + 1).unwrap();
        prop_assert_ne!(*a, *b);
    }

    #[test]
    fn out_of_range_index_rejected(
        seed in seed_strategy(),
        index in FIRST_HARDENED_INDEX..=u32::MAX,
    ) {
        prop_assert_eq!(
            derive(&seed, index).unwrap_err(),
            Error::InvalidIndex(index)
        );
    }

    #[test]
    fn strkey_decode_inverts_encode(key in any::<[u8; 32]>()) {
        let account_id = strkey::encode_account_id(&key);
        prop_assert!(account_id.starts_with('G'));
        prop_assert_eq!(strkey::decode_account_id(&account_id).unwrap(), key);

        let secret = strkey::encode_secret_seed(&key);
        prop_assert!(secret.starts_with('S'));
        prop_assert_eq!(*strkey::decode_secret_seed(&secret).unwrap(), key);
    }

    #[test]
    fn keypair_signatures_verify(
        key in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let keypair = Keypair::from_raw_seed(&key);
        let signature = keypair.sign(&message);
        prop_assert!(keypair.verify(&message, &signature).is_ok());
        let restored = Keypair::from_secret_seed(&keypair.secret_seed()).unwrap();
        prop_assert_eq!(restored.account_id(), keypair.account_id());
    }
}
