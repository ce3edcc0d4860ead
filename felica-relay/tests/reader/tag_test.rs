use crate::common::fixtures::{attribute_block, polling_reply};
use crate::common::helpers::{mock_reader, sample_identity, seed_session};
use felica_relay::Error;
use felica_relay::card::StationTable;
use felica_relay::tag::MockTransceiver;
use felica_relay::transport::MockTransport;

#[test]
fn polled_identity_is_read() {
    let mut tag = MockTransceiver::new();
    tag.push_response(polling_reply());
    let mut mock = MockTransport::new();
    seed_session(&mut mock, &[attribute_block(1500)], &[], &[]);
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read_tag(&mut tag).unwrap();
    assert_eq!(outcome.record().identity(), &sample_identity());
    assert_eq!(outcome.record().balance().unwrap().balance, Some(1500));
    assert_eq!(tag.sent, vec![vec![0x06, 0x00, 0x00, 0x03, 0x00, 0x00]]);
}

#[test]
fn non_transit_tag_never_reaches_the_server() {
    let mut tag = MockTransceiver::new();
    // polling answered with the wrong response code
    let mut reply = polling_reply();
    reply[1] = 0x07;
    tag.push_response(reply);
    let mut reader = mock_reader(MockTransport::new(), StationTable::new()).unwrap();

    assert!(matches!(
        reader.read_tag(&mut tag),
        Err(Error::UnsupportedCard(_))
    ));
    assert!(reader.client().transport().sent.is_empty());
}
