use felica_relay::Error;
use felica_relay::protocol::{decode_mutual_authentication, decode_read_blocks};
use felica_relay::utils::bytes_to_hex;
use proptest::prelude::*;

#[test]
fn mixed_case_hex_blocks() {
    let blocks = decode_read_blocks(r#"{"blocks":["0aFF","A0ff"]}"#).unwrap();
    assert_eq!(blocks, vec![vec![0x0a, 0xff], vec![0xa0, 0xff]]);
}

#[test]
fn odd_length_block_is_malformed() {
    assert!(matches!(
        decode_read_blocks(r#"{"blocks":["6400","640"]}"#),
        Err(Error::MalformedPayload(_))
    ));
}

#[test]
fn nested_auth_fields_are_kept_verbatim() {
    let fields = decode_mutual_authentication(r#"{"a":{"b":[1,2,{"c":null}]},"d":"e"}"#).unwrap();
    assert_eq!(fields["a"]["b"][2]["c"], serde_json::Value::Null);
    assert_eq!(fields["d"], "e");
}

proptest! {
    #[test]
    fn encoded_blocks_decode_back(blocks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..20), 0..20)) {
        let hex: Vec<String> = blocks.iter().map(|b| bytes_to_hex(b)).collect();
        let body = serde_json::json!({ "blocks": hex }).to_string();
        prop_assert_eq!(decode_read_blocks(&body).unwrap(), blocks);
    }

    #[test]
    fn decoders_never_panic(body in "\\PC{0,64}") {
        let _ = decode_read_blocks(&body);
        let _ = decode_mutual_authentication(&body);
    }
}
