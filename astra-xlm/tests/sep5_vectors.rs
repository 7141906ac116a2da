//! SEP-0005 reference vectors, end to end from mnemonic to StrKeys.

use astra::{Language, Wallet, stretch};
use astra_xlm::{Deriver, Error, derive, slip10::FIRST_HARDENED_INDEX};

const ILLNESS: &str = "illness spike retreat truth genius clock brain pass fit cave bargain toe";
const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn accounts(mnemonic: &str, passphrase: Option<&str>, indices: &[u32]) -> Vec<(String, String)> {
    let wallet = Wallet::from_mnemonic_in(Language::English, mnemonic, passphrase).unwrap();
    let deriver = Deriver::new(&wallet);
    indices
        .iter()
        .map(|index| {
            let account = deriver.derive(*index).unwrap();
            (account.account_id, account.secret_seed.to_string())
        })
        .collect()
}

#[test]
fn illness_vector() {
    let expected = [
        (
            "GDRXE2BQUC3AZNPVFSCEZ76NJ3WWL25FYFK6RGZGIEKWE4SOOHSUJUJ6",
            "SBGWSG6BTNCKCOB3DIFBGCVMUPQFYPA2G4O34RMTB343OYPXU5DJDVMN",
        ),
        (
            "GBAW5XGWORWVFE2XTJYDTLDHXTY2Q2MO73HYCGB3XMFMQ562Q2W2GJQX",
            "SCEPFFWGAG5P2VX5DHIYK3XEMZYLTYWIPWYEKXFHSK25RVMIUNJ7CTIS",
        ),
        (
            "GAY5PRAHJ2HIYBYCLZXTHID6SPVELOOYH2LBPH3LD4RUMXUW3DOYTLXW",
            "SDAILLEZCSA67DUEP3XUPZJ7NYG7KGVRM46XA7K5QWWUIGADUZCZWTJP",
        ),
    ];

    let derived = accounts(ILLNESS, None, &[0, 1, 2]);
    for ((account_id, secret), (want_id, want_secret)) in derived.iter().zip(expected) {
        assert_eq!(account_id, want_id);
        assert_eq!(secret, want_secret);
    }
}

#[test]
fn abandon_vector() {
    let derived = accounts(ABANDON, None, &[0, 1]);
    assert_eq!(
        derived[0].0,
        "GB3JDWCQJCWMJ3IILWIGDTQJJC5567PGVEVXSCVPEQOTDN64VJBDQBYX"
    );
    assert_eq!(
        derived[0].1,
        "SBUV3MRWKNS6AYKZ6E6MOUVF2OYMON3MIUASWL3JLY5E3ISDJFELYBRZ"
    );
    assert_eq!(
        derived[1].0,
        "GDVSYYTUAJ3ACHTPQNSTQBDQ4LDHQCMNY4FCEQH5TJUMSSLWQSTG42MV"
    );
    assert_eq!(
        derived[1].1,
        "SCHDCVCWGAKGIMTORV6K5DYYV3BY4WG3RA4M6MCBGJLHUCWU2MC6DL66"
    );
}

#[test]
fn highest_account_index() {
    let derived = accounts(ILLNESS, None, &[FIRST_HARDENED_INDEX - 1]);
    assert_eq!(
        derived[0].0,
        "GDFBFRFJ32FAS747QDP3IQBL4JQHJNSVPUYDD2VL74GY7XIPFPX4CNS4"
    );
    assert_eq!(
        derived[0].1,
        "SASBZQXVQJCOIVGW5NHMFJZ7ZDASQAIG6EYNMJWOEKAUSVKEI4LKUDDW"
    );
}

#[test]
fn index_past_hardened_range_fails() {
    let seed = stretch(ILLNESS, "").unwrap();
    assert_eq!(
        derive(seed.as_bytes(), FIRST_HARDENED_INDEX).unwrap_err(),
        Error::InvalidIndex(FIRST_HARDENED_INDEX)
    );
}

#[test]
fn passphrase_one_character_apart() {
    let a = accounts(ILLNESS, Some("p4ssphr4se"), &[0]);
    let b = accounts(ILLNESS, Some("p4ssphr4sf"), &[0]);
    assert_eq!(
        a[0].0,
        "GAEZGTGOZU7ROMCJDCLPG5EUTVQKLARN5GDGAMYTDAOV27XWCA3CQZQQ"
    );
    assert_eq!(
        b[0].0,
        "GC423FKJ7TQ7JWUMGHVJYCQKJDGJWFT54PHB6D5HB3CZDTINQKNZHLRL"
    );
    assert_ne!(a, b);
}

#[test]
fn raw_key_matches_stretch_then_derive() {
    let seed = stretch(ILLNESS, "").unwrap();
    let raw = derive(seed.as_bytes(), 0).unwrap();
    assert_eq!(
        hex::encode(raw.as_slice()),
        "4d691bc19b44a1383b1a0a130aaca3e05c3c1a371dbe45930ef9b761f7a74691"
    );

    let wallet = Wallet::from_mnemonic(ILLNESS, None).unwrap();
    let via_deriver = Deriver::new(&wallet).derive_raw(0).unwrap();
    assert_eq!(*raw, *via_deriver);
}

#[test]
fn invalid_mnemonic_is_core_error() {
    let core = Wallet::from_mnemonic("illness spike", None).unwrap_err();
    let err = Error::from(core);
    assert_eq!(err, Error::Core(astra::Error::InvalidMnemonic));
    assert!(std::error::Error::source(&err).is_some());
}
